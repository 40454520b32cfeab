// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP purifier builder.

use crate::device::{DiscoveryPolicy, Purifier};
use crate::error::{ConfigError, Error};
use crate::protocol::{HttpClient, HttpConfig};

/// Builder for purifiers reached through the Winix cloud.
///
/// Created with [`Purifier::http`].
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use winix_lib::{DiscoveryPolicy, Purifier};
/// use winix_lib::protocol::HttpConfig;
///
/// # async fn example() -> winix_lib::Result<()> {
/// // Default gateway, single discovery attempt
/// let purifier = Purifier::http("852F2C1A_abc").build().await?;
///
/// // Custom gateway, retrying discovery
/// let purifier = Purifier::http("852F2C1A_abc")
///     .with_config(HttpConfig::new().with_timeout(Duration::from_secs(5)))
///     .with_discovery_policy(DiscoveryPolicy::retry(3, Duration::from_secs(10)))
///     .build_strict()
///     .await?;
///
/// // No network access until the first call
/// let purifier = Purifier::http("852F2C1A_abc").build_without_discovery()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PurifierBuilder {
    device_id: String,
    config: HttpConfig,
    policy: DiscoveryPolicy,
}

impl PurifierBuilder {
    pub(crate) fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            config: HttpConfig::default(),
            policy: DiscoveryPolicy::default(),
        }
    }

    /// Replaces the transport configuration.
    #[must_use]
    pub fn with_config(mut self, config: HttpConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets how initial discovery is attempted.
    #[must_use]
    pub fn with_discovery_policy(mut self, policy: DiscoveryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the device identifier.
    #[must_use]
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// Returns the transport configuration.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the purifier and attempts discovery.
    ///
    /// A failed discovery is logged and the purifier is returned
    /// undiscovered; the host can call [`Purifier::discover`] later.
    ///
    /// # Errors
    ///
    /// Returns error if the device identifier is empty or the HTTP client
    /// cannot be created.
    pub async fn build(self) -> Result<Purifier<HttpClient>, Error> {
        let policy = self.policy;
        let purifier = self.build_without_discovery()?;
        if let Err(e) = purifier.discover_with(&policy).await {
            tracing::warn!(
                device_id = %purifier.device_id(),
                error = %e,
                "Continuing without discovered air purifier"
            );
        }
        Ok(purifier)
    }

    /// Builds the purifier and requires discovery to succeed.
    ///
    /// # Errors
    ///
    /// Returns error if the device identifier is empty, the HTTP client
    /// cannot be created, or every discovery attempt fails.
    pub async fn build_strict(self) -> Result<Purifier<HttpClient>, Error> {
        let policy = self.policy;
        let purifier = self.build_without_discovery()?;
        purifier.discover_with(&policy).await?;
        Ok(purifier)
    }

    /// Builds an undiscovered purifier without network access.
    ///
    /// # Errors
    ///
    /// Returns error if the device identifier is empty or the HTTP client
    /// cannot be created.
    pub fn build_without_discovery(self) -> Result<Purifier<HttpClient>, Error> {
        if self.device_id.trim().is_empty() {
            return Err(ConfigError::MissingDeviceId.into());
        }
        let client = self.config.into_client()?;
        Ok(Purifier::new(client, self.device_id))
    }
}
