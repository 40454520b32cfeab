// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Winix control command definitions.
//!
//! A control command writes one vendor attribute. On the wire it is a
//! `GET` to the device's control URL suffixed with `/{code}:{value}`.
//!
//! # Available Commands
//!
//! | Command Type | Code | Values |
//! |-------------|------|--------|
//! | [`PowerCommand`] | `A02` | `0`, `1` |
//! | [`ModeCommand`] | `A03` | `01` (auto), `02` (manual) |
//! | [`SpeedCommand`] | `A04` | `01`, `02`, `03`, `05` |
//! | [`PlasmawaveCommand`] | `A07` | `0`, `1` |
//!
//! # Examples
//!
//! ```
//! use winix_lib::command::{Command, SpeedCommand};
//! use winix_lib::types::RotationSpeed;
//!
//! let cmd = SpeedCommand::from(RotationSpeed::new(30).unwrap());
//! assert_eq!(cmd.path_segment(), "A04:02");
//! ```

mod fan;
mod power;

pub use fan::{ModeCommand, SpeedCommand};
pub use power::{PlasmawaveCommand, PowerCommand};

use crate::types::StatusCode;

/// A command that writes one attribute of a Winix device.
pub trait Command {
    /// Returns the attribute this command writes.
    fn status_code(&self) -> StatusCode;

    /// Returns the encoded value.
    ///
    /// Mode and speed use zero-padded two-digit codes, power and
    /// plasma-wave use bare integers.
    fn value(&self) -> String;

    /// Returns the `{code}:{value}` path segment appended to the control URL.
    fn path_segment(&self) -> String {
        format!("{}:{}", self.status_code(), self.value())
    }
}
