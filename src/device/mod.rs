// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Characteristic adapter for one Winix air purifier.
//!
//! [`Purifier`] translates between host characteristics and the vendor's
//! status codes. Every get performs a fresh status fetch, and every set
//! issues one control request. Nothing is cached between calls apart
//! from the last device snapshot, which only gates whether operations are
//! allowed at all.
//!
//! # Discovery
//!
//! A purifier starts undiscovered. Until one status fetch has succeeded,
//! every characteristic operation fails with
//! [`Error::NotDiscovered`] without touching the network.
//!
//! ```no_run
//! use winix_lib::Purifier;
//! use winix_lib::types::{ActiveState, RotationSpeed};
//!
//! # async fn example() -> winix_lib::Result<()> {
//! let purifier = Purifier::http("my-device-id").build().await?;
//!
//! if purifier.get_active_state().await? == ActiveState::Inactive {
//!     purifier.set_active_state(ActiveState::Active).await?;
//! }
//! purifier.set_rotation_speed(RotationSpeed::new(60)?).await?;
//! # Ok(())
//! # }
//! ```

mod discovery;
#[cfg(feature = "http")]
mod http_builder;

pub use discovery::DiscoveryPolicy;
#[cfg(feature = "http")]
pub use http_builder::PurifierBuilder;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::command::{Command, ModeCommand, PlasmawaveCommand, PowerCommand, SpeedCommand};
use crate::error::{Error, Result};
use crate::protocol::Protocol;
#[cfg(feature = "http")]
use crate::protocol::HttpClient;
use crate::response::{AttributeMap, StatusResponse};
use crate::state::{CharacteristicState, DeviceSnapshot, DiscoveryState, StateChange};
use crate::subscription::{CallbackRegistry, Subscribable, SubscriptionId};
use crate::types::{
    ActiveState, AirQuality, CurrentPurifierState, Plasmawave, RotationSpeed, StatusCode,
    TargetPurifierState,
};

/// A Winix air purifier reachable through the vendor cloud.
///
/// Cloning is cheap and clones share the snapshot, the characteristic
/// state and the subscriptions. Concurrent operations are independent
/// requests: there is no queueing, so a get racing a set may observe
/// either the old or the new device state.
///
/// # Type Parameter
///
/// `P` is the transport, [`HttpClient`] in production.
#[derive(Debug)]
pub struct Purifier<P: Protocol> {
    device_id: Arc<str>,
    protocol: Arc<P>,
    discovery: Arc<RwLock<DiscoveryState>>,
    state: Arc<RwLock<CharacteristicState>>,
    callbacks: Arc<CallbackRegistry>,
}

impl<P: Protocol> Clone for Purifier<P> {
    fn clone(&self) -> Self {
        Self {
            device_id: Arc::clone(&self.device_id),
            protocol: Arc::clone(&self.protocol),
            discovery: Arc::clone(&self.discovery),
            state: Arc::clone(&self.state),
            callbacks: Arc::clone(&self.callbacks),
        }
    }
}

#[cfg(feature = "http")]
impl Purifier<HttpClient> {
    /// Creates a builder for a purifier reached over HTTP.
    #[must_use]
    pub fn http(device_id: impl Into<String>) -> PurifierBuilder {
        PurifierBuilder::new(device_id)
    }
}

impl<P: Protocol> Purifier<P> {
    /// Creates an undiscovered purifier using the given transport.
    pub fn new(protocol: P, device_id: impl Into<String>) -> Self {
        Self {
            device_id: Arc::from(device_id.into()),
            protocol: Arc::new(protocol),
            discovery: Arc::new(RwLock::new(DiscoveryState::Undiscovered)),
            state: Arc::new(RwLock::new(CharacteristicState::new())),
            callbacks: Arc::new(CallbackRegistry::new()),
        }
    }

    /// Returns the vendor device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the transport.
    #[must_use]
    pub fn protocol(&self) -> &P {
        &self.protocol
    }

    /// Returns whether a status fetch has ever succeeded.
    #[must_use]
    pub fn is_discovered(&self) -> bool {
        self.discovery.read().is_discovered()
    }

    /// Returns the latest device snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<DeviceSnapshot> {
        self.discovery.read().snapshot().cloned()
    }

    /// Returns the host-visible characteristic values.
    #[must_use]
    pub fn characteristics(&self) -> CharacteristicState {
        self.state.read().clone()
    }

    // ========== Status Fetcher ==========

    /// Fetches the device record and returns its attributes.
    ///
    /// On success the device snapshot is replaced, which also discovers
    /// the device. On failure the previous snapshot is left untouched.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the body is not a status
    /// envelope, or the envelope holds no device.
    pub async fn fetch_all_statuses(&self) -> Result<AttributeMap> {
        let response = self.protocol.get_status(&self.device_id).await?;
        let status: StatusResponse = response.parse()?;
        let record = status.into_device_record()?;
        let attributes = record.attributes().clone();
        let snapshot = DeviceSnapshot::new(record);

        let first = {
            let mut discovery = self.discovery.write();
            let first = !discovery.is_discovered();
            discovery.replace(snapshot.clone());
            first
        };
        if first {
            tracing::info!(device_id = %self.device_id, "Air purifier discovered");
        }
        self.callbacks.dispatch_snapshot_replaced(&snapshot);

        Ok(attributes)
    }

    /// Fetches all statuses and projects one code.
    ///
    /// Missing or unparseable values yield `0`.
    ///
    /// # Errors
    ///
    /// Returns error if the status fetch fails.
    pub async fn fetch_status(&self, code: StatusCode) -> Result<i64> {
        Ok(self.fetch_all_statuses().await?.int(code))
    }

    /// Fetches the device once, discovering it on success.
    ///
    /// # Errors
    ///
    /// Returns error if the status fetch fails.
    pub async fn discover(&self) -> Result<DeviceSnapshot> {
        self.fetch_all_statuses().await?;
        self.snapshot().ok_or(Error::NotDiscovered)
    }

    /// Discovers the device following `policy`.
    ///
    /// # Errors
    ///
    /// Returns the last error if every attempt fails.
    pub async fn discover_with(&self, policy: &DiscoveryPolicy) -> Result<DeviceSnapshot> {
        policy.run(self).await
    }

    // ========== Active ==========

    /// Reads the `Active` characteristic.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_active_state(&self) -> Result<ActiveState> {
        let state = ActiveState::from_vendor(self.read(StatusCode::Power).await?);
        self.record(StateChange::Active(state));
        Ok(state)
    }

    /// Switches the purifier on or off.
    ///
    /// The requested state is recorded as soon as the request succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the request fails.
    pub async fn set_active_state(&self, state: ActiveState) -> Result<()> {
        self.send(&PowerCommand::new(state)).await?;
        self.record(StateChange::Active(state));
        Ok(())
    }

    // ========== CurrentAirPurifierState ==========

    /// Reads the `CurrentAirPurifierState` characteristic.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_current_purifier_state(&self) -> Result<CurrentPurifierState> {
        let state = CurrentPurifierState::from_vendor_power(self.read(StatusCode::Power).await?);
        self.record(StateChange::CurrentState(state));
        Ok(state)
    }

    // ========== TargetAirPurifierState ==========

    /// Reads the `TargetAirPurifierState` characteristic.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_target_purifier_state(&self) -> Result<TargetPurifierState> {
        let state = TargetPurifierState::from_vendor(self.read(StatusCode::Mode).await?);
        self.record(StateChange::TargetState(state));
        Ok(state)
    }

    /// Switches between auto and manual mode.
    ///
    /// The requested mode is recorded as soon as the request succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the request fails.
    pub async fn set_target_purifier_state(&self, state: TargetPurifierState) -> Result<()> {
        self.send(&ModeCommand::new(state)).await?;
        self.record(StateChange::TargetState(state));
        Ok(())
    }

    // ========== RotationSpeed ==========

    /// Reads the `RotationSpeed` characteristic.
    ///
    /// Vendor levels 1, 2, 3 and 5 read as 25, 50, 75 and 100; anything
    /// else reads as 0.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_rotation_speed(&self) -> Result<RotationSpeed> {
        let speed = RotationSpeed::from_vendor(self.read(StatusCode::Speed).await?);
        self.record(StateChange::RotationSpeed(speed));
        Ok(speed)
    }

    /// Sets the fan speed, bucketed onto the nearest vendor level above.
    ///
    /// The host value is not recorded: the device settles on the bucket's
    /// level, which the next get reports.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the request fails.
    pub async fn set_rotation_speed(&self, speed: RotationSpeed) -> Result<()> {
        self.send(&SpeedCommand::from(speed)).await
    }

    // ========== AirQuality ==========

    /// Reads the `AirQuality` characteristic.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_air_quality(&self) -> Result<AirQuality> {
        let quality = AirQuality::from_vendor(self.read(StatusCode::AirQuality).await?);
        self.record(StateChange::AirQuality(quality));
        Ok(quality)
    }

    // ========== Plasmawave ==========

    /// Reads the plasma-wave switch.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the fetch fails.
    pub async fn get_plasmawave(&self) -> Result<Plasmawave> {
        let state = Plasmawave::from_vendor(self.read(StatusCode::Plasmawave).await?);
        self.record(StateChange::Plasmawave(state));
        Ok(state)
    }

    /// Switches the plasma-wave ioniser.
    ///
    /// # Errors
    ///
    /// Returns error if the device is undiscovered or the request fails.
    pub async fn set_plasmawave(&self, state: Plasmawave) -> Result<()> {
        self.send(&PlasmawaveCommand::new(state)).await
    }

    // ========== Internals ==========

    fn ensure_discovered(&self) -> Result<()> {
        if self.is_discovered() {
            Ok(())
        } else {
            Err(Error::NotDiscovered)
        }
    }

    async fn read(&self, code: StatusCode) -> Result<i64> {
        self.ensure_discovered()?;
        self.fetch_status(code).await
    }

    async fn send<C: Command + Sync>(&self, command: &C) -> Result<()> {
        self.ensure_discovered()?;
        tracing::debug!(
            device_id = %self.device_id,
            command = %command.path_segment(),
            "Sending control command"
        );
        self.protocol.send_command(&self.device_id, command).await?;
        Ok(())
    }

    fn record(&self, change: StateChange) {
        let changed = self.state.write().apply(&change);
        if changed {
            self.callbacks.dispatch(&change);
        }
    }
}

impl<P: Protocol> Subscribable for Purifier<P> {
    fn on_active_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(ActiveState) + Send + Sync + 'static,
    {
        self.callbacks.on_active_changed(callback)
    }

    fn on_current_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(CurrentPurifierState) + Send + Sync + 'static,
    {
        self.callbacks.on_current_state_changed(callback)
    }

    fn on_target_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(TargetPurifierState) + Send + Sync + 'static,
    {
        self.callbacks.on_target_state_changed(callback)
    }

    fn on_rotation_speed_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(RotationSpeed) + Send + Sync + 'static,
    {
        self.callbacks.on_rotation_speed_changed(callback)
    }

    fn on_air_quality_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(AirQuality) + Send + Sync + 'static,
    {
        self.callbacks.on_air_quality_changed(callback)
    }

    fn on_plasmawave_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(Plasmawave) + Send + Sync + 'static,
    {
        self.callbacks.on_plasmawave_changed(callback)
    }

    fn on_state_changed<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&StateChange) + Send + Sync + 'static,
    {
        self.callbacks.on_state_changed(callback)
    }

    fn on_snapshot_replaced<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&DeviceSnapshot) + Send + Sync + 'static,
    {
        self.callbacks.on_snapshot_replaced(callback)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.callbacks.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use serde_json::json;

    use super::*;
    use crate::error::ProtocolError;
    use crate::protocol::mock::MockProtocol;

    const DEVICE: &str = "852F2C1A_abc";

    async fn discovered(attributes: serde_json::Value) -> Purifier<MockProtocol> {
        let purifier = Purifier::new(MockProtocol::new().with_attributes(attributes), DEVICE);
        purifier.discover().await.unwrap();
        purifier
    }

    fn speed(v: u8) -> RotationSpeed {
        RotationSpeed::new(v).unwrap()
    }

    #[tokio::test]
    async fn undiscovered_operations_fail_without_io() {
        let purifier = Purifier::new(MockProtocol::new(), DEVICE);

        assert!(matches!(
            purifier.get_active_state().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.set_active_state(ActiveState::Active).await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.get_current_purifier_state().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.get_target_purifier_state().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier
                .set_target_purifier_state(TargetPurifierState::Auto)
                .await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.get_rotation_speed().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.set_rotation_speed(speed(50)).await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.get_air_quality().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.get_plasmawave().await,
            Err(Error::NotDiscovered)
        ));
        assert!(matches!(
            purifier.set_plasmawave(Plasmawave::On).await,
            Err(Error::NotDiscovered)
        ));

        assert_eq!(purifier.protocol().request_count(), 0);
    }

    #[tokio::test]
    async fn failed_discovery_stays_undiscovered() {
        let protocol = MockProtocol::new();
        protocol.push_status_failure(503);
        let purifier = Purifier::new(protocol, DEVICE);

        let err = purifier.discover().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::ConnectionFailed(_))));
        assert!(!purifier.is_discovered());
        assert!(matches!(
            purifier.get_active_state().await,
            Err(Error::NotDiscovered)
        ));
        assert_eq!(purifier.protocol().request_count(), 1);
    }

    #[tokio::test]
    async fn empty_device_list_is_a_parse_error() {
        let protocol = MockProtocol::new();
        protocol.push_raw_status(r#"{"body": {"data": []}}"#);
        let purifier = Purifier::new(protocol, DEVICE);

        assert!(matches!(purifier.discover().await, Err(Error::Parse(_))));
        assert!(!purifier.is_discovered());
    }

    #[tokio::test]
    async fn active_state_from_power() {
        let purifier = discovered(json!({"A02": "1"})).await;
        assert_eq!(purifier.get_active_state().await.unwrap(), ActiveState::Active);

        purifier.protocol().push_attributes(json!({"A02": "0"}));
        assert_eq!(
            purifier.get_active_state().await.unwrap(),
            ActiveState::Inactive
        );
    }

    #[tokio::test]
    async fn every_get_fetches_fresh_status() {
        let purifier = discovered(json!({"A02": "1"})).await;
        purifier.get_active_state().await.unwrap();
        purifier.get_active_state().await.unwrap();
        assert_eq!(
            purifier.protocol().requests(),
            vec![
                format!("status/{DEVICE}"),
                format!("status/{DEVICE}"),
                format!("status/{DEVICE}"),
            ]
        );
    }

    #[tokio::test]
    async fn current_state_from_power() {
        let purifier = discovered(json!({"A02": "1"})).await;
        assert_eq!(
            purifier.get_current_purifier_state().await.unwrap(),
            CurrentPurifierState::PurifyingAir
        );

        purifier.protocol().push_attributes(json!({"A02": "0"}));
        assert_eq!(
            purifier.get_current_purifier_state().await.unwrap(),
            CurrentPurifierState::Inactive
        );
    }

    #[tokio::test]
    async fn target_state_from_mode() {
        let purifier = discovered(json!({"A03": "01"})).await;
        assert_eq!(
            purifier.get_target_purifier_state().await.unwrap(),
            TargetPurifierState::Auto
        );

        purifier.protocol().push_attributes(json!({"A03": "02"}));
        assert_eq!(
            purifier.get_target_purifier_state().await.unwrap(),
            TargetPurifierState::Manual
        );
    }

    #[tokio::test]
    async fn rotation_speed_levels() {
        let purifier = discovered(json!({"A04": "01"})).await;
        for (level, expected) in [("01", 25), ("02", 50), ("03", 75), ("05", 100), ("04", 0), ("00", 0)] {
            purifier.protocol().push_attributes(json!({"A04": level}));
            assert_eq!(
                purifier.get_rotation_speed().await.unwrap().value(),
                expected,
                "level {level}"
            );
        }
    }

    #[tokio::test]
    async fn air_quality_levels() {
        let purifier = discovered(json!({})).await;
        for (level, expected) in [
            ("1", AirQuality::Good),
            ("2", AirQuality::Fair),
            ("3", AirQuality::Poor),
            ("4", AirQuality::Unknown),
            ("x", AirQuality::Unknown),
        ] {
            purifier.protocol().push_attributes(json!({"S07": level}));
            assert_eq!(purifier.get_air_quality().await.unwrap(), expected);
        }
    }

    #[tokio::test]
    async fn missing_attribute_degrades_to_default() {
        let purifier = discovered(json!({"A02": "1"})).await;
        assert_eq!(purifier.get_air_quality().await.unwrap(), AirQuality::Unknown);
        assert_eq!(purifier.get_rotation_speed().await.unwrap().value(), 0);
        assert_eq!(purifier.get_plasmawave().await.unwrap(), Plasmawave::Off);
    }

    #[tokio::test]
    async fn set_active_sends_power_command() {
        let purifier = discovered(json!({"A02": "0"})).await;
        purifier.set_active_state(ActiveState::Active).await.unwrap();

        let requests = purifier.protocol().requests();
        assert_eq!(requests.last().unwrap(), &format!("control/{DEVICE}/A02:1"));
        assert_eq!(purifier.characteristics().active(), Some(ActiveState::Active));
    }

    #[tokio::test]
    async fn failed_set_keeps_snapshot_and_state() {
        let purifier = discovered(json!({"A02": "0"})).await;
        purifier.get_active_state().await.unwrap();
        let before = purifier.snapshot().unwrap();

        purifier.protocol().fail_commands(500);
        let err = purifier
            .set_active_state(ActiveState::Active)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Protocol(_)));
        assert_eq!(purifier.snapshot().unwrap(), before);
        assert_eq!(
            purifier.characteristics().active(),
            Some(ActiveState::Inactive)
        );
    }

    #[tokio::test]
    async fn failed_get_keeps_previous_snapshot() {
        let purifier = discovered(json!({"A02": "1"})).await;
        purifier.get_active_state().await.unwrap();
        let before = purifier.snapshot().unwrap();

        purifier.protocol().push_status_failure(500);
        assert!(purifier.get_active_state().await.is_err());
        assert!(purifier.is_discovered());
        assert_eq!(purifier.snapshot().unwrap(), before);
        assert_eq!(
            purifier.characteristics().active(),
            Some(ActiveState::Active)
        );
    }

    #[tokio::test]
    async fn set_target_state_codes() {
        let purifier = discovered(json!({})).await;
        purifier
            .set_target_purifier_state(TargetPurifierState::Auto)
            .await
            .unwrap();
        purifier
            .set_target_purifier_state(TargetPurifierState::Manual)
            .await
            .unwrap();

        let requests = purifier.protocol().requests();
        assert_eq!(requests[1], format!("control/{DEVICE}/A03:01"));
        assert_eq!(requests[2], format!("control/{DEVICE}/A03:02"));
        assert_eq!(
            purifier.characteristics().target_state(),
            Some(TargetPurifierState::Manual)
        );
    }

    #[tokio::test]
    async fn set_rotation_speed_buckets() {
        let purifier = discovered(json!({})).await;
        for v in [0, 25, 26, 50, 51, 75, 76, 100] {
            purifier.set_rotation_speed(speed(v)).await.unwrap();
        }
        let codes: Vec<String> = purifier
            .protocol()
            .requests()
            .into_iter()
            .skip(1)
            .map(|r| r.rsplit('/').next().unwrap().to_string())
            .collect();
        assert_eq!(
            codes,
            ["A04:01", "A04:01", "A04:02", "A04:02", "A04:03", "A04:03", "A04:05", "A04:05"]
        );
    }

    #[tokio::test]
    async fn speed_round_trip_is_bucketed() {
        let purifier = discovered(json!({"A04": "01"})).await;
        purifier.set_rotation_speed(speed(30)).await.unwrap();
        purifier.protocol().push_attributes(json!({"A04": "02"}));
        assert_eq!(purifier.get_rotation_speed().await.unwrap().value(), 50);
    }

    #[tokio::test]
    async fn plasmawave_get_and_set() {
        let purifier = discovered(json!({"A07": "1"})).await;
        assert_eq!(purifier.get_plasmawave().await.unwrap(), Plasmawave::On);

        purifier.set_plasmawave(Plasmawave::Off).await.unwrap();
        assert_eq!(
            purifier.protocol().requests().last().unwrap(),
            &format!("control/{DEVICE}/A07:0")
        );
    }

    #[tokio::test]
    async fn fetch_status_projects_code() {
        let purifier = Purifier::new(
            MockProtocol::new().with_attributes(json!({"A04": "05", "A07": "?"})),
            DEVICE,
        );
        assert_eq!(purifier.fetch_status(StatusCode::Speed).await.unwrap(), 5);
        assert_eq!(purifier.fetch_status(StatusCode::Plasmawave).await.unwrap(), 0);
        assert!(purifier.is_discovered());
    }

    #[tokio::test]
    async fn callbacks_fire_on_change_only() {
        let purifier = discovered(json!({"A02": "1"})).await;
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        purifier.on_active_changed(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        purifier.get_active_state().await.unwrap();
        purifier.get_active_state().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 1);

        purifier.set_active_state(ActiveState::Inactive).await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn snapshot_callback_sees_every_fetch() {
        let purifier = Purifier::new(MockProtocol::new().with_attributes(json!({})), DEVICE);
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = Arc::clone(&count);
        let id = purifier.on_snapshot_replaced(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        purifier.discover().await.unwrap();
        purifier.get_air_quality().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);

        assert!(purifier.unsubscribe(id));
        purifier.get_air_quality().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn clones_share_discovery() {
        let purifier = Purifier::new(MockProtocol::new().with_attributes(json!({})), DEVICE);
        let clone = purifier.clone();
        purifier.discover().await.unwrap();
        assert!(clone.is_discovered());
    }
}
