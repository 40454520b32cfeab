// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vendor status codes.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A vendor-defined attribute identifier.
///
/// The Winix cloud reports device state as a flat map keyed by these short
/// codes, and control requests address the same codes.
///
/// # Examples
///
/// ```
/// use winix_lib::types::StatusCode;
///
/// assert_eq!(StatusCode::Power.as_str(), "A02");
/// assert_eq!("S07".parse::<StatusCode>().unwrap(), StatusCode::AirQuality);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Power on/off (`A02`).
    Power,
    /// Auto/manual mode (`A03`).
    Mode,
    /// Fan speed level (`A04`).
    Speed,
    /// Plasma-wave ioniser (`A07`).
    Plasmawave,
    /// Air quality level (`S07`). Read-only.
    AirQuality,
}

impl StatusCode {
    /// All known status codes.
    pub const ALL: [Self; 5] = [
        Self::Power,
        Self::Mode,
        Self::Speed,
        Self::Plasmawave,
        Self::AirQuality,
    ];

    /// Returns the code as it appears on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Power => "A02",
            Self::Mode => "A03",
            Self::Speed => "A04",
            Self::Plasmawave => "A07",
            Self::AirQuality => "S07",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusCode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValueError::InvalidStatusCode(s.to_string()))
    }
}
