// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Initial discovery policy.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::protocol::Protocol;
use crate::state::DeviceSnapshot;

use super::Purifier;

/// How the initial status fetch is attempted.
///
/// Only discovery is retried. Characteristic gets and sets always issue
/// exactly one request.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use winix_lib::DiscoveryPolicy;
///
/// let policy = DiscoveryPolicy::retry(3, Duration::from_secs(2));
/// assert_eq!(policy.attempts(), 3);
/// assert_eq!(DiscoveryPolicy::default().attempts(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DiscoveryPolicy {
    /// A single attempt.
    #[default]
    Once,
    /// Up to `attempts` tries with a fixed `delay` between them.
    Retry {
        /// Total number of attempts, including the first.
        attempts: u32,
        /// Pause between two attempts.
        delay: Duration,
    },
}

impl DiscoveryPolicy {
    /// Creates a retrying policy.
    #[must_use]
    pub const fn retry(attempts: u32, delay: Duration) -> Self {
        Self::Retry { attempts, delay }
    }

    /// Returns the total number of attempts, never less than one.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        match self {
            Self::Once => 1,
            Self::Retry { attempts, .. } => (*attempts).max(1),
        }
    }

    fn delay(&self) -> Duration {
        match self {
            Self::Once => Duration::ZERO,
            Self::Retry { delay, .. } => *delay,
        }
    }

    pub(super) async fn run<P: Protocol>(&self, purifier: &Purifier<P>) -> Result<DeviceSnapshot> {
        let attempts = self.attempts();
        let mut last_error = Error::NotDiscovered;

        for attempt in 1..=attempts {
            match purifier.discover().await {
                Ok(snapshot) => return Ok(snapshot),
                Err(e) => {
                    tracing::warn!(
                        device_id = %purifier.device_id(),
                        attempt,
                        attempts,
                        error = %e,
                        "Air purifier discovery failed"
                    );
                    last_error = e;
                }
            }
            if attempt < attempts {
                tokio::time::sleep(self.delay()).await;
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::protocol::mock::MockProtocol;

    #[test]
    fn zero_attempts_still_tries_once() {
        assert_eq!(DiscoveryPolicy::retry(0, Duration::ZERO).attempts(), 1);
    }

    #[tokio::test]
    async fn once_gives_up_after_first_failure() {
        let protocol = MockProtocol::new();
        protocol.push_status_failure(502);
        let purifier = Purifier::new(protocol, "dev");

        let result = purifier.discover_with(&DiscoveryPolicy::Once).await;
        assert!(matches!(result, Err(Error::Protocol(_))));
        assert_eq!(purifier.protocol().request_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_recovers_after_failures() {
        let protocol = MockProtocol::new();
        protocol.push_status_failure(502);
        protocol.push_status_failure(502);
        protocol.push_attributes(json!({"A02": "1"}));
        let purifier = Purifier::new(protocol, "dev");

        let policy = DiscoveryPolicy::retry(5, Duration::from_secs(30));
        purifier.discover_with(&policy).await.unwrap();

        assert!(purifier.is_discovered());
        assert_eq!(purifier.protocol().request_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn retry_returns_last_error() {
        let protocol = MockProtocol::new();
        protocol.push_status_failure(500);
        let purifier = Purifier::new(protocol, "dev");

        let policy = DiscoveryPolicy::retry(3, Duration::from_millis(100));
        assert!(purifier.discover_with(&policy).await.is_err());
        assert!(!purifier.is_discovered());
        assert_eq!(purifier.protocol().request_count(), 3);
    }
}
