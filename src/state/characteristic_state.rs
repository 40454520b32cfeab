// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-visible characteristic values.

use crate::types::{
    ActiveState, AirQuality, CurrentPurifierState, Plasmawave, RotationSpeed,
    TargetPurifierState,
};

use super::StateChange;

/// Last value of each characteristic as seen by the host.
///
/// All fields start unknown. A failed get or set leaves the previous value
/// in place, so the host keeps showing stale state until the next
/// successful read.
///
/// # Examples
///
/// ```
/// use winix_lib::state::CharacteristicState;
/// use winix_lib::types::AirQuality;
///
/// let mut state = CharacteristicState::new();
/// assert_eq!(state.air_quality(), None);
///
/// state.set_air_quality(AirQuality::Fair);
/// assert_eq!(state.air_quality(), Some(AirQuality::Fair));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CharacteristicState {
    active: Option<ActiveState>,
    current_state: Option<CurrentPurifierState>,
    target_state: Option<TargetPurifierState>,
    rotation_speed: Option<RotationSpeed>,
    air_quality: Option<AirQuality>,
    plasmawave: Option<Plasmawave>,
}

impl CharacteristicState {
    /// Creates a state with every characteristic unknown.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the `Active` value.
    #[must_use]
    pub fn active(&self) -> Option<ActiveState> {
        self.active
    }

    /// Sets the `Active` value.
    pub fn set_active(&mut self, state: ActiveState) {
        self.active = Some(state);
    }

    /// Returns the `CurrentAirPurifierState` value.
    #[must_use]
    pub fn current_state(&self) -> Option<CurrentPurifierState> {
        self.current_state
    }

    /// Sets the `CurrentAirPurifierState` value.
    pub fn set_current_state(&mut self, state: CurrentPurifierState) {
        self.current_state = Some(state);
    }

    /// Returns the `TargetAirPurifierState` value.
    #[must_use]
    pub fn target_state(&self) -> Option<TargetPurifierState> {
        self.target_state
    }

    /// Sets the `TargetAirPurifierState` value.
    pub fn set_target_state(&mut self, state: TargetPurifierState) {
        self.target_state = Some(state);
    }

    /// Returns the `RotationSpeed` value.
    #[must_use]
    pub fn rotation_speed(&self) -> Option<RotationSpeed> {
        self.rotation_speed
    }

    /// Sets the `RotationSpeed` value.
    pub fn set_rotation_speed(&mut self, speed: RotationSpeed) {
        self.rotation_speed = Some(speed);
    }

    /// Returns the `AirQuality` value.
    #[must_use]
    pub fn air_quality(&self) -> Option<AirQuality> {
        self.air_quality
    }

    /// Sets the `AirQuality` value.
    pub fn set_air_quality(&mut self, quality: AirQuality) {
        self.air_quality = Some(quality);
    }

    /// Returns the plasma-wave switch value.
    #[must_use]
    pub fn plasmawave(&self) -> Option<Plasmawave> {
        self.plasmawave
    }

    /// Sets the plasma-wave switch value.
    pub fn set_plasmawave(&mut self, state: Plasmawave) {
        self.plasmawave = Some(state);
    }

    /// Applies a change, returning whether any value actually changed.
    pub fn apply(&mut self, change: &StateChange) -> bool {
        match change {
            StateChange::Active(v) => replace(&mut self.active, *v),
            StateChange::CurrentState(v) => replace(&mut self.current_state, *v),
            StateChange::TargetState(v) => replace(&mut self.target_state, *v),
            StateChange::RotationSpeed(v) => replace(&mut self.rotation_speed, *v),
            StateChange::AirQuality(v) => replace(&mut self.air_quality, *v),
            StateChange::Plasmawave(v) => replace(&mut self.plasmawave, *v),
        }
    }

    /// Forgets every value.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        false
    } else {
        *slot = Some(value);
        true
    }
}
