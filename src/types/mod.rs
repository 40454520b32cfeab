// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for Winix air purifier control.
//!
//! This module provides type-safe representations of both value spaces the
//! adapter translates between: the home-automation host's characteristic
//! values and the vendor's integer status codes.
//!
//! # Types
//!
//! - [`StatusCode`] - Vendor attribute identifiers (`A02`, `A03`, ...)
//! - [`ActiveState`] - Host power characteristic (Active/Inactive)
//! - [`CurrentPurifierState`] - Host read-only purifier activity
//! - [`TargetPurifierState`] - Host Auto/Manual mode
//! - [`RotationSpeed`] - Host fan speed percentage (0-100)
//! - [`FanSpeed`] - Vendor fan level (1, 2, 3, 5)
//! - [`AirQuality`] - Host air quality enumeration
//! - [`Plasmawave`] - Plasma-wave ioniser switch

mod air_quality;
mod mode;
mod power;
mod speed;
mod status_code;

pub use air_quality::AirQuality;
pub use mode::TargetPurifierState;
pub use power::{ActiveState, CurrentPurifierState, Plasmawave};
pub use speed::{FanSpeed, RotationSpeed};
pub use status_code::StatusCode;
