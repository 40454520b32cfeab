// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Power and plasma-wave commands.

use crate::command::Command;
use crate::types::{ActiveState, Plasmawave, StatusCode};

/// Command to switch the purifier on or off.
///
/// # Examples
///
/// ```
/// use winix_lib::command::{Command, PowerCommand};
///
/// let cmd = PowerCommand::on();
/// assert_eq!(cmd.path_segment(), "A02:1");
///
/// let cmd = PowerCommand::off();
/// assert_eq!(cmd.value(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerCommand {
    state: ActiveState,
}

impl PowerCommand {
    /// Creates a command setting the given power state.
    #[must_use]
    pub const fn new(state: ActiveState) -> Self {
        Self { state }
    }

    /// Creates a command to turn the purifier on.
    #[must_use]
    pub const fn on() -> Self {
        Self::new(ActiveState::Active)
    }

    /// Creates a command to turn the purifier off.
    #[must_use]
    pub const fn off() -> Self {
        Self::new(ActiveState::Inactive)
    }

    /// Returns the requested state.
    #[must_use]
    pub const fn state(&self) -> ActiveState {
        self.state
    }
}

impl Command for PowerCommand {
    fn status_code(&self) -> StatusCode {
        StatusCode::Power
    }

    fn value(&self) -> String {
        self.state.vendor_value().to_string()
    }
}

/// Command to switch the plasma-wave ioniser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlasmawaveCommand {
    state: Plasmawave,
}

impl PlasmawaveCommand {
    /// Creates a command setting the given ioniser state.
    #[must_use]
    pub const fn new(state: Plasmawave) -> Self {
        Self { state }
    }

    /// Returns the requested state.
    #[must_use]
    pub const fn state(&self) -> Plasmawave {
        self.state
    }
}

impl From<bool> for PlasmawaveCommand {
    fn from(on: bool) -> Self {
        Self::new(Plasmawave::from(on))
    }
}

impl Command for PlasmawaveCommand {
    fn status_code(&self) -> StatusCode {
        StatusCode::Plasmawave
    }

    fn value(&self) -> String {
        self.state.vendor_value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_command_on() {
        let cmd = PowerCommand::on();
        assert_eq!(cmd.status_code(), StatusCode::Power);
        assert_eq!(cmd.value(), "1");
    }

    #[test]
    fn power_command_off() {
        let cmd = PowerCommand::off();
        assert_eq!(cmd.path_segment(), "A02:0");
        assert_eq!(cmd.state(), ActiveState::Inactive);
    }

    #[test]
    fn plasmawave_command_from_bool() {
        assert_eq!(PlasmawaveCommand::from(true).path_segment(), "A07:1");
        assert_eq!(PlasmawaveCommand::from(false).path_segment(), "A07:0");
    }
}
