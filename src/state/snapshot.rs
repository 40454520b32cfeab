// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device snapshot and discovery lifecycle.

use chrono::{DateTime, Utc};

use crate::response::{AttributeMap, DeviceRecord};

/// The most recently fetched device record.
///
/// Replaced wholesale on every successful status fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceSnapshot {
    record: DeviceRecord,
    fetched_at: DateTime<Utc>,
}

impl DeviceSnapshot {
    /// Creates a snapshot of `record` stamped with the current time.
    #[must_use]
    pub fn new(record: DeviceRecord) -> Self {
        Self::at(record, Utc::now())
    }

    /// Creates a snapshot with an explicit fetch time.
    #[must_use]
    pub fn at(record: DeviceRecord, fetched_at: DateTime<Utc>) -> Self {
        Self { record, fetched_at }
    }

    /// Returns the full device record.
    #[must_use]
    pub fn record(&self) -> &DeviceRecord {
        &self.record
    }

    /// Returns the attribute map.
    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        self.record.attributes()
    }

    /// Returns when the record was fetched.
    #[must_use]
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Whether the device has answered a status request yet.
///
/// Characteristic operations are only allowed once the device is
/// [`Discovered`](Self::Discovered).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DiscoveryState {
    /// No status fetch has succeeded.
    #[default]
    Undiscovered,
    /// At least one status fetch has succeeded; holds the latest one.
    Discovered(DeviceSnapshot),
}

impl DiscoveryState {
    /// Returns whether a snapshot exists.
    #[must_use]
    pub fn is_discovered(&self) -> bool {
        matches!(self, Self::Discovered(_))
    }

    /// Returns the snapshot, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&DeviceSnapshot> {
        match self {
            Self::Undiscovered => None,
            Self::Discovered(snapshot) => Some(snapshot),
        }
    }

    /// Replaces the snapshot, discovering the device if needed.
    pub fn replace(&mut self, snapshot: DeviceSnapshot) {
        *self = Self::Discovered(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(power: &str) -> DeviceRecord {
        DeviceRecord::new([("A02", power)].into_iter().collect())
    }

    #[test]
    fn starts_undiscovered() {
        let state = DiscoveryState::default();
        assert!(!state.is_discovered());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn replace_discovers_and_overwrites() {
        let mut state = DiscoveryState::default();
        state.replace(DeviceSnapshot::new(record("1")));
        assert!(state.is_discovered());

        state.replace(DeviceSnapshot::new(record("0")));
        let snapshot = state.snapshot().unwrap();
        assert_eq!(
            snapshot.attributes().get_raw("A02"),
            Some(&serde_json::Value::from("0"))
        );
    }

    #[test]
    fn snapshot_keeps_fetch_time() {
        let at = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let snapshot = DeviceSnapshot::at(record("1"), at);
        assert_eq!(snapshot.fetched_at(), at);
    }
}
