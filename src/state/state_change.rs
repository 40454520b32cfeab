// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State change representation.
//!
//! State changes are the unit of update for a
//! [`CharacteristicState`](super::CharacteristicState). They come from two
//! places: values read back by a characteristic get, and values written
//! eagerly after a successful set.
//!
//! # Examples
//!
//! ```
//! use winix_lib::state::{CharacteristicState, StateChange};
//! use winix_lib::types::{ActiveState, TargetPurifierState};
//!
//! let mut state = CharacteristicState::new();
//!
//! // Apply returns true if state actually changed
//! assert!(state.apply(&StateChange::Active(ActiveState::Active)));
//! assert!(!state.apply(&StateChange::Active(ActiveState::Active)));
//! assert!(state.apply(&StateChange::TargetState(TargetPurifierState::Auto)));
//! ```

use crate::types::{
    ActiveState, AirQuality, CurrentPurifierState, Plasmawave, RotationSpeed,
    TargetPurifierState,
};

/// A change of one host-visible characteristic value.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StateChange {
    /// `Active` changed.
    Active(ActiveState),

    /// `CurrentAirPurifierState` changed.
    CurrentState(CurrentPurifierState),

    /// `TargetAirPurifierState` changed.
    TargetState(TargetPurifierState),

    /// `RotationSpeed` changed.
    RotationSpeed(RotationSpeed),

    /// `AirQuality` changed.
    AirQuality(AirQuality),

    /// Plasma-wave switch changed.
    Plasmawave(Plasmawave),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_round_trip() {
        let change = StateChange::TargetState(TargetPurifierState::Auto);
        let json = serde_json::to_string(&change).unwrap();
        let back: StateChange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
