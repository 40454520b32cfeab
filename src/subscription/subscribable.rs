// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscribable trait for characteristic change notifications.

use crate::state::{DeviceSnapshot, StateChange};
use crate::subscription::SubscriptionId;
use crate::types::{
    ActiveState, AirQuality, CurrentPurifierState, Plasmawave, RotationSpeed,
    TargetPurifierState,
};

/// Trait for types that support characteristic subscriptions.
///
/// Callbacks fire only when a value actually changes.
pub trait Subscribable {
    /// Subscribes to `Active` changes.
    fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ActiveState) + Send + Sync + 'static;

    /// Subscribes to `CurrentAirPurifierState` changes.
    fn on_current_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(CurrentPurifierState) + Send + Sync + 'static;

    /// Subscribes to `TargetAirPurifierState` changes.
    fn on_target_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(TargetPurifierState) + Send + Sync + 'static;

    /// Subscribes to `RotationSpeed` changes.
    fn on_rotation_speed_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(RotationSpeed) + Send + Sync + 'static;

    /// Subscribes to `AirQuality` changes.
    fn on_air_quality_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AirQuality) + Send + Sync + 'static;

    /// Subscribes to plasma-wave switch changes.
    fn on_plasmawave_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Plasmawave) + Send + Sync + 'static;

    /// Subscribes to all changes.
    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static;

    /// Subscribes to successful status fetches.
    ///
    /// The callback receives the new snapshot, including the first one that
    /// discovers the device.
    fn on_snapshot_replaced<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceSnapshot) + Send + Sync + 'static;

    /// Unsubscribes a callback by its subscription ID.
    ///
    /// Returns `true` if the subscription was found and removed.
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
