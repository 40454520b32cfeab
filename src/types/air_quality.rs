// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Air quality reported by the purifier's sensor.

use std::fmt;

/// The host's `AirQuality` characteristic.
///
/// The vendor reports three levels under
/// [`StatusCode::AirQuality`](super::StatusCode::AirQuality). Anything else,
/// including a missing value, is [`Unknown`](Self::Unknown).
///
/// # Examples
///
/// ```
/// use winix_lib::types::AirQuality;
///
/// assert_eq!(AirQuality::from_vendor(1), AirQuality::Good);
/// assert_eq!(AirQuality::from_vendor(9), AirQuality::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub enum AirQuality {
    /// No reading or an unrecognised level.
    #[default]
    Unknown,
    /// Vendor level 1.
    Good,
    /// Vendor level 2.
    Fair,
    /// Vendor level 3.
    Poor,
}

impl AirQuality {
    /// Maps a vendor air quality level.
    #[must_use]
    pub const fn from_vendor(value: i64) -> Self {
        match value {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Poor,
            _ => Self::Unknown,
        }
    }

    /// Returns the host characteristic value.
    ///
    /// The host scale also has `EXCELLENT = 1` and `INFERIOR = 4`, which the
    /// purifier never reports.
    #[must_use]
    pub const fn hap_value(&self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Good => 2,
            Self::Fair => 3,
            Self::Poor => 5,
        }
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "UNKNOWN",
            Self::Good => "GOOD",
            Self::Fair => "FAIR",
            Self::Poor => "POOR",
        };
        f.write_str(name)
    }
}
