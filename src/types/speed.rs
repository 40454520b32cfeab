// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fan speed types.
//!
//! The host expresses fan speed as a percentage ([`RotationSpeed`]); the
//! purifier only knows four discrete levels ([`FanSpeed`]). The mapping
//! between them is many-to-one: a percentage is bucketed onto a level, and
//! reading a level back yields the top of its bucket. Setting 30% therefore
//! reads back as 50%.
//!
//! | Percentage | Level | Reads back as |
//! |-----------|-------|---------------|
//! | 0-25      | `01`  | 25            |
//! | 26-50     | `02`  | 50            |
//! | 51-75     | `03`  | 75            |
//! | 76-100    | `05`  | 100           |

use std::fmt;

use crate::error::ValueError;

/// Fan rotation speed as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use winix_lib::types::RotationSpeed;
///
/// let speed = RotationSpeed::new(75).unwrap();
/// assert_eq!(speed.value(), 75);
///
/// assert!(RotationSpeed::new(101).is_err());
/// assert_eq!(RotationSpeed::clamped(150).value(), 100);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct RotationSpeed(u8);

impl RotationSpeed {
    /// Maximum speed value.
    pub const MAX: u8 = 100;

    /// Fan stopped or unknown level.
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation speed.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value is greater than 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > Self::MAX {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: i64::from(Self::MAX),
                actual: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a rotation speed, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    /// Returns the percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Maps a raw vendor speed value to a percentage.
    ///
    /// Unknown levels map to 0.
    #[must_use]
    pub fn from_vendor(value: i64) -> Self {
        FanSpeed::from_vendor(value).map_or(Self::ZERO, FanSpeed::rotation_speed)
    }
}

impl fmt::Display for RotationSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for RotationSpeed {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Discrete fan level understood by the purifier.
///
/// Level 4 does not exist on the C545; turbo is reported as 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FanSpeed {
    /// Level 1.
    Low,
    /// Level 2.
    Medium,
    /// Level 3.
    High,
    /// Level 5.
    Turbo,
}

impl FanSpeed {
    /// Buckets a percentage onto a fan level.
    #[must_use]
    pub const fn from_rotation_speed(speed: RotationSpeed) -> Self {
        match speed.value() {
            0..=25 => Self::Low,
            26..=50 => Self::Medium,
            51..=75 => Self::High,
            _ => Self::Turbo,
        }
    }

    /// Maps a raw vendor value to a level, if it is one the device uses.
    #[must_use]
    pub const fn from_vendor(value: i64) -> Option<Self> {
        match value {
            1 => Some(Self::Low),
            2 => Some(Self::Medium),
            3 => Some(Self::High),
            5 => Some(Self::Turbo),
            _ => None,
        }
    }

    /// Returns the two-digit vendor control code.
    #[must_use]
    pub const fn vendor_code(&self) -> &'static str {
        match self {
            Self::Low => "01",
            Self::Medium => "02",
            Self::High => "03",
            Self::Turbo => "05",
        }
    }

    /// Returns the percentage this level reads back as.
    #[must_use]
    pub const fn rotation_speed(self) -> RotationSpeed {
        match self {
            Self::Low => RotationSpeed(25),
            Self::Medium => RotationSpeed(50),
            Self::High => RotationSpeed(75),
            Self::Turbo => RotationSpeed(100),
        }
    }
}

impl From<RotationSpeed> for FanSpeed {
    fn from(speed: RotationSpeed) -> Self {
        Self::from_rotation_speed(speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_speed_valid() {
        for v in 0..=100 {
            assert_eq!(RotationSpeed::new(v).unwrap().value(), v);
        }
        assert!(RotationSpeed::new(101).is_err());
    }

    #[test]
    fn rotation_speed_clamped() {
        assert_eq!(RotationSpeed::clamped(0).value(), 0);
        assert_eq!(RotationSpeed::clamped(255).value(), 100);
    }

    #[test]
    fn set_buckets() {
        let expected = |v: u8| match v {
            0..=25 => "01",
            26..=50 => "02",
            51..=75 => "03",
            _ => "05",
        };
        for v in 0..=100 {
            let level = FanSpeed::from_rotation_speed(RotationSpeed::new(v).unwrap());
            assert_eq!(level.vendor_code(), expected(v), "speed {v}");
        }
    }

    #[test]
    fn bucket_boundaries() {
        let code = |v| FanSpeed::from(RotationSpeed::new(v).unwrap()).vendor_code();
        assert_eq!(code(25), "01");
        assert_eq!(code(26), "02");
        assert_eq!(code(50), "02");
        assert_eq!(code(51), "03");
        assert_eq!(code(75), "03");
        assert_eq!(code(76), "05");
    }

    #[test]
    fn vendor_levels_read_back() {
        assert_eq!(RotationSpeed::from_vendor(1).value(), 25);
        assert_eq!(RotationSpeed::from_vendor(2).value(), 50);
        assert_eq!(RotationSpeed::from_vendor(3).value(), 75);
        assert_eq!(RotationSpeed::from_vendor(5).value(), 100);
    }

    #[test]
    fn unknown_vendor_levels_read_as_zero() {
        for v in [0, 4, 6, -1, 99] {
            assert_eq!(RotationSpeed::from_vendor(v), RotationSpeed::ZERO);
        }
    }

    #[test]
    fn bucket_round_trip_is_lossy() {
        let level = FanSpeed::from(RotationSpeed::new(30).unwrap());
        assert_eq!(level, FanSpeed::Medium);
        assert_eq!(level.rotation_speed().value(), 50);
    }
}
