// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Callback management for characteristic subscriptions.
//!
//! - [`SubscriptionId`] - Unique identifier for unsubscribing
//! - [`CallbackRegistry`] - Registry for storing and dispatching callbacks

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::state::{DeviceSnapshot, StateChange};
use crate::types::{
    ActiveState, AirQuality, CurrentPurifierState, Plasmawave, RotationSpeed,
    TargetPurifierState,
};

/// Unique identifier for a subscription.
///
/// IDs are unique within a registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Creates a new subscription ID with the given value.
    #[must_use]
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", self.0)
    }
}

type Callbacks<T> = RwLock<HashMap<SubscriptionId, Arc<T>>>;

type ActiveCallback = dyn Fn(ActiveState) + Send + Sync;
type CurrentStateCallback = dyn Fn(CurrentPurifierState) + Send + Sync;
type TargetStateCallback = dyn Fn(TargetPurifierState) + Send + Sync;
type RotationSpeedCallback = dyn Fn(RotationSpeed) + Send + Sync;
type AirQualityCallback = dyn Fn(AirQuality) + Send + Sync;
type PlasmawaveCallback = dyn Fn(Plasmawave) + Send + Sync;
type StateChangedCallback = dyn Fn(&StateChange) + Send + Sync;
type SnapshotCallback = dyn Fn(&DeviceSnapshot) + Send + Sync;

/// Registry for characteristic change callbacks.
///
/// This is how a host integration learns about values it did not ask for,
/// such as the eager update that follows a successful `Active` write.
///
/// # Thread Safety
///
/// The registry can be shared between tasks. Callbacks are invoked
/// synchronously on the task that produced the change and must not block.
#[derive(Default)]
pub struct CallbackRegistry {
    next_id: AtomicU64,
    active: Callbacks<ActiveCallback>,
    current_state: Callbacks<CurrentStateCallback>,
    target_state: Callbacks<TargetStateCallback>,
    rotation_speed: Callbacks<RotationSpeedCallback>,
    air_quality: Callbacks<AirQualityCallback>,
    plasmawave: Callbacks<PlasmawaveCallback>,
    state_changed: Callbacks<StateChangedCallback>,
    snapshot_replaced: Callbacks<SnapshotCallback>,
}

impl CallbackRegistry {
    /// Creates a new empty callback registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> SubscriptionId {
        SubscriptionId::new(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    // =========================================================================
    // Registration methods
    // =========================================================================

    /// Registers a callback for `Active` changes.
    pub fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ActiveState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.active.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for `CurrentAirPurifierState` changes.
    pub fn on_current_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(CurrentPurifierState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.current_state.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for `TargetAirPurifierState` changes.
    pub fn on_target_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(TargetPurifierState) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.target_state.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for `RotationSpeed` changes.
    pub fn on_rotation_speed_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(RotationSpeed) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.rotation_speed.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for `AirQuality` changes.
    pub fn on_air_quality_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AirQuality) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.air_quality.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for plasma-wave switch changes.
    pub fn on_plasmawave_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Plasmawave) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.plasmawave.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for every change.
    pub fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.state_changed.write().insert(id, Arc::new(callback));
        id
    }

    /// Registers a callback for each successful status fetch.
    pub fn on_snapshot_replaced<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceSnapshot) + Send + Sync + 'static,
    {
        let id = self.next_id();
        self.snapshot_replaced.write().insert(id, Arc::new(callback));
        id
    }

    // =========================================================================
    // Unsubscription
    // =========================================================================

    /// Unregisters a callback by its subscription ID.
    ///
    /// Returns `true` if a callback was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.active.write().remove(&id).is_some()
            || self.current_state.write().remove(&id).is_some()
            || self.target_state.write().remove(&id).is_some()
            || self.rotation_speed.write().remove(&id).is_some()
            || self.air_quality.write().remove(&id).is_some()
            || self.plasmawave.write().remove(&id).is_some()
            || self.state_changed.write().remove(&id).is_some()
            || self.snapshot_replaced.write().remove(&id).is_some()
    }

    /// Clears all callbacks.
    pub fn clear(&self) {
        self.active.write().clear();
        self.current_state.write().clear();
        self.target_state.write().clear();
        self.rotation_speed.write().clear();
        self.air_quality.write().clear();
        self.plasmawave.write().clear();
        self.state_changed.write().clear();
        self.snapshot_replaced.write().clear();
    }

    /// Returns the total number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.read().len()
            + self.current_state.read().len()
            + self.target_state.read().len()
            + self.rotation_speed.read().len()
            + self.air_quality.read().len()
            + self.plasmawave.read().len()
            + self.state_changed.read().len()
            + self.snapshot_replaced.read().len()
    }

    /// Returns whether no callbacks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Dispatch methods
    // =========================================================================

    /// Dispatches a change to the matching callbacks.
    ///
    /// Callbacks are cloned out of the registry before being invoked, so a
    /// callback may subscribe or unsubscribe without deadlocking.
    pub fn dispatch(&self, change: &StateChange) {
        for callback in snapshot(&self.state_changed) {
            callback(change);
        }
        self.dispatch_specific(change);
    }

    fn dispatch_specific(&self, change: &StateChange) {
        match change {
            StateChange::Active(v) => snapshot(&self.active).iter().for_each(|cb| cb(*v)),
            StateChange::CurrentState(v) => {
                snapshot(&self.current_state).iter().for_each(|cb| cb(*v));
            }
            StateChange::TargetState(v) => {
                snapshot(&self.target_state).iter().for_each(|cb| cb(*v));
            }
            StateChange::RotationSpeed(v) => {
                snapshot(&self.rotation_speed).iter().for_each(|cb| cb(*v));
            }
            StateChange::AirQuality(v) => {
                snapshot(&self.air_quality).iter().for_each(|cb| cb(*v));
            }
            StateChange::Plasmawave(v) => {
                snapshot(&self.plasmawave).iter().for_each(|cb| cb(*v));
            }
        }
    }

    /// Dispatches a freshly fetched snapshot.
    pub fn dispatch_snapshot_replaced(&self, device: &DeviceSnapshot) {
        for callback in snapshot(&self.snapshot_replaced) {
            callback(device);
        }
    }
}

fn snapshot<T: ?Sized>(callbacks: &Callbacks<T>) -> Vec<Arc<T>> {
    callbacks.read().values().cloned().collect()
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("callbacks", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn subscription_ids_are_unique() {
        let registry = CallbackRegistry::new();
        let a = registry.on_active_changed(|_| {});
        let b = registry.on_active_changed(|_| {});
        assert_ne!(a, b);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn dispatch_active_change() {
        let registry = CallbackRegistry::new();
        let seen = Arc::new(RwLock::new(None));
        let seen_clone = Arc::clone(&seen);
        registry.on_active_changed(move |state| *seen_clone.write() = Some(state));

        registry.dispatch(&StateChange::Active(ActiveState::Active));
        assert_eq!(*seen.read(), Some(ActiveState::Active));
    }

    #[test]
    fn generic_callback_sees_every_change() {
        let registry = CallbackRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        registry.on_state_changed(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::AirQuality(AirQuality::Poor));
        registry.dispatch(&StateChange::Plasmawave(Plasmawave::On));
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn specific_callbacks_ignore_other_changes() {
        let registry = CallbackRegistry::new();
        let generic = Arc::new(AtomicUsize::new(0));
        let specific = Arc::new(AtomicUsize::new(0));
        let g = Arc::clone(&generic);
        let s = Arc::clone(&specific);
        registry.on_state_changed(move |_| {
            g.fetch_add(1, Ordering::SeqCst);
        });
        registry.on_target_state_changed(move |_| {
            s.fetch_add(1, Ordering::SeqCst);
        });

        registry.dispatch(&StateChange::TargetState(TargetPurifierState::Auto));
        registry.dispatch(&StateChange::Active(ActiveState::Active));
        assert_eq!(generic.load(Ordering::SeqCst), 2);
        assert_eq!(specific.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unsubscribe_removes_callback() {
        let registry = CallbackRegistry::new();
        let id = registry.on_rotation_speed_changed(|_| {});
        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn clear_removes_everything() {
        let registry = CallbackRegistry::new();
        registry.on_air_quality_changed(|_| {});
        registry.on_snapshot_replaced(|_| {});
        registry.clear();
        assert!(registry.is_empty());
    }
}
