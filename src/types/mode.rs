// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Auto/manual operating mode.

use std::fmt;

use crate::error::ValueError;

/// The host's `TargetAirPurifierState` characteristic.
///
/// The vendor reports `1` for auto mode under
/// [`StatusCode::Mode`](super::StatusCode::Mode); every other value is
/// treated as manual.
///
/// # Examples
///
/// ```
/// use winix_lib::types::TargetPurifierState;
///
/// assert_eq!(TargetPurifierState::from_vendor(1), TargetPurifierState::Auto);
/// assert_eq!(TargetPurifierState::from_vendor(2), TargetPurifierState::Manual);
/// assert_eq!(TargetPurifierState::Auto.vendor_code(), "01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TargetPurifierState {
    /// Fan speed is chosen by the user.
    Manual,
    /// Fan speed follows the air quality sensor.
    Auto,
}

impl TargetPurifierState {
    /// Maps a vendor mode value to the host state.
    #[must_use]
    pub const fn from_vendor(value: i64) -> Self {
        if value == 1 { Self::Auto } else { Self::Manual }
    }

    /// Returns the two-digit vendor control code.
    #[must_use]
    pub const fn vendor_code(&self) -> &'static str {
        match self {
            Self::Auto => "01",
            Self::Manual => "02",
        }
    }

    /// Returns the host characteristic value (`MANUAL = 0`, `AUTO = 1`).
    #[must_use]
    pub const fn hap_value(&self) -> u8 {
        match self {
            Self::Manual => 0,
            Self::Auto => 1,
        }
    }

    /// Creates a state from the host characteristic value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is not 0 or 1.
    pub fn from_hap(value: u8) -> Result<Self, ValueError> {
        match value {
            0 => Ok(Self::Manual),
            1 => Ok(Self::Auto),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: 1,
                actual: i64::from(value),
            }),
        }
    }
}

impl fmt::Display for TargetPurifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual => f.write_str("MANUAL"),
            Self::Auto => f.write_str("AUTO"),
        }
    }
}
