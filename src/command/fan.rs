// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mode and fan speed commands.

use crate::command::Command;
use crate::types::{FanSpeed, RotationSpeed, StatusCode, TargetPurifierState};

/// Command to switch between auto and manual mode.
///
/// # Examples
///
/// ```
/// use winix_lib::command::{Command, ModeCommand};
/// use winix_lib::types::TargetPurifierState;
///
/// let cmd = ModeCommand::new(TargetPurifierState::Auto);
/// assert_eq!(cmd.path_segment(), "A03:01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeCommand {
    mode: TargetPurifierState,
}

impl ModeCommand {
    /// Creates a command setting the given mode.
    #[must_use]
    pub const fn new(mode: TargetPurifierState) -> Self {
        Self { mode }
    }

    /// Returns the requested mode.
    #[must_use]
    pub const fn mode(&self) -> TargetPurifierState {
        self.mode
    }
}

impl Command for ModeCommand {
    fn status_code(&self) -> StatusCode {
        StatusCode::Mode
    }

    fn value(&self) -> String {
        self.mode.vendor_code().to_string()
    }
}

/// Command to set the fan level.
///
/// Built from a host percentage, which is bucketed onto a [`FanSpeed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedCommand {
    level: FanSpeed,
}

impl SpeedCommand {
    /// Creates a command setting the given fan level.
    #[must_use]
    pub const fn new(level: FanSpeed) -> Self {
        Self { level }
    }

    /// Returns the requested fan level.
    #[must_use]
    pub const fn level(&self) -> FanSpeed {
        self.level
    }
}

impl From<RotationSpeed> for SpeedCommand {
    fn from(speed: RotationSpeed) -> Self {
        Self::new(FanSpeed::from_rotation_speed(speed))
    }
}

impl Command for SpeedCommand {
    fn status_code(&self) -> StatusCode {
        StatusCode::Speed
    }

    fn value(&self) -> String {
        self.level.vendor_code().to_string()
    }
}
