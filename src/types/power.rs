// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power-related types for Winix air purifiers.
//!
//! This module provides the host-side power characteristics and the
//! plasma-wave switch, together with their vendor encodings.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// The host's `Active` characteristic.
///
/// The vendor reports power under [`StatusCode::Power`](super::StatusCode::Power);
/// any nonzero value means the purifier is running.
///
/// # Examples
///
/// ```
/// use winix_lib::types::ActiveState;
///
/// assert_eq!(ActiveState::from_vendor(1), ActiveState::Active);
/// assert_eq!(ActiveState::from_vendor(0), ActiveState::Inactive);
/// assert_eq!(ActiveState::Active.vendor_value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ActiveState {
    /// The purifier is off.
    Inactive,
    /// The purifier is on.
    Active,
}

impl ActiveState {
    /// Maps a vendor power value to the host state.
    #[must_use]
    pub const fn from_vendor(value: i64) -> Self {
        if value == 0 {
            Self::Inactive
        } else {
            Self::Active
        }
    }

    /// Returns the vendor power value.
    #[must_use]
    pub const fn vendor_value(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Active => 1,
        }
    }

    /// Returns the host characteristic value (`INACTIVE = 0`, `ACTIVE = 1`).
    #[must_use]
    pub const fn hap_value(&self) -> u8 {
        self.vendor_value()
    }

    /// Creates a state from the host characteristic value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if the value is not 0 or 1.
    pub fn from_hap(value: u8) -> Result<Self, ValueError> {
        match value {
            0 => Ok(Self::Inactive),
            1 => Ok(Self::Active),
            _ => Err(ValueError::OutOfRange {
                min: 0,
                max: 1,
                actual: i64::from(value),
            }),
        }
    }

    /// Returns whether the purifier is on.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for ActiveState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("INACTIVE"),
            Self::Active => f.write_str("ACTIVE"),
        }
    }
}

impl FromStr for ActiveState {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INACTIVE" | "OFF" | "0" | "FALSE" => Ok(Self::Inactive),
            "ACTIVE" | "ON" | "1" | "TRUE" => Ok(Self::Active),
            _ => Err(ValueError::InvalidCharacteristicValue {
                characteristic: "Active".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl From<bool> for ActiveState {
    fn from(value: bool) -> Self {
        if value { Self::Active } else { Self::Inactive }
    }
}

/// The host's read-only `CurrentAirPurifierState` characteristic.
///
/// The C545 has no distinct idle report, so the adapter only ever produces
/// [`Inactive`](Self::Inactive) or [`PurifyingAir`](Self::PurifyingAir).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CurrentPurifierState {
    /// The purifier is off.
    Inactive,
    /// The purifier is on but not moving air.
    Idle,
    /// The purifier is running.
    PurifyingAir,
}

impl CurrentPurifierState {
    /// Maps a vendor power value to the current purifier state.
    #[must_use]
    pub const fn from_vendor_power(value: i64) -> Self {
        if value == 0 {
            Self::Inactive
        } else {
            Self::PurifyingAir
        }
    }

    /// Returns the host characteristic value.
    #[must_use]
    pub const fn hap_value(&self) -> u8 {
        match self {
            Self::Inactive => 0,
            Self::Idle => 1,
            Self::PurifyingAir => 2,
        }
    }
}

impl fmt::Display for CurrentPurifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => f.write_str("INACTIVE"),
            Self::Idle => f.write_str("IDLE"),
            Self::PurifyingAir => f.write_str("PURIFYING_AIR"),
        }
    }
}

/// State of the plasma-wave ioniser, exposed to the host as an on/off switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Plasmawave {
    /// Ioniser is off.
    Off,
    /// Ioniser is on.
    On,
}

impl Plasmawave {
    /// Maps a raw vendor value; anything nonzero counts as on.
    #[must_use]
    pub const fn from_vendor(value: i64) -> Self {
        if value == 0 { Self::Off } else { Self::On }
    }

    /// Returns the vendor value (`0` or `1`).
    #[must_use]
    pub const fn vendor_value(&self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// Returns whether the ioniser is on.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl From<bool> for Plasmawave {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

impl From<Plasmawave> for bool {
    fn from(value: Plasmawave) -> Self {
        value.is_on()
    }
}
