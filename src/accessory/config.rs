// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Accessory configuration as supplied by the host.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
#[cfg(feature = "http")]
use crate::protocol::HttpConfig;

const DEFAULT_NAME: &str = "Air Purifier";
const DEFAULT_AIR_QUALITY_NAME: &str = "Air Quality";

/// Per-accessory settings, deserialized from the host's camelCase JSON.
///
/// # Examples
///
/// ```
/// use winix_lib::accessory::AccessoryConfig;
///
/// let config = AccessoryConfig::from_json(
///     r#"{"name": "Bedroom", "deviceId": "852F2C1A_abc", "showPlasmawave": true}"#,
/// )?;
///
/// assert_eq!(config.device_id(), "852F2C1A_abc");
/// assert_eq!(config.plasmawave_name(), "Bedroom Plasmawave");
/// assert!(!config.show_air_quality());
/// # Ok::<(), winix_lib::error::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryConfig {
    #[serde(default = "default_name")]
    name: String,
    #[serde(default)]
    device_id: Option<String>,
    #[serde(default)]
    show_air_quality: bool,
    #[serde(default = "default_air_quality_name")]
    name_air_quality: String,
    #[serde(default)]
    show_plasmawave: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name_plasmawave: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    control_server: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timeout_secs: Option<u64>,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_air_quality_name() -> String {
    DEFAULT_AIR_QUALITY_NAME.to_string()
}

impl AccessoryConfig {
    /// Creates a configuration for `device_id` with every option defaulted.
    #[must_use]
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            name: default_name(),
            device_id: Some(device_id.into()),
            show_air_quality: false,
            name_air_quality: default_air_quality_name(),
            show_plasmawave: false,
            name_plasmawave: None,
            status_server: None,
            control_server: None,
            timeout_secs: None,
        }
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, otherwise whatever
    /// [`validate`](Self::validate) reports.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Converts and validates an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`from_json`](Self::from_json).
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that a device identifier is present and the timeout is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDeviceId`] when the identifier is absent
    /// or blank, and [`ConfigError::ZeroTimeout`] for `timeoutSecs: 0`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.device_id().trim().is_empty() {
            return Err(ConfigError::MissingDeviceId);
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_air_quality(mut self, name: Option<String>) -> Self {
        self.show_air_quality = true;
        if let Some(name) = name {
            self.name_air_quality = name;
        }
        self
    }

    #[must_use]
    pub fn with_plasmawave(mut self, name: Option<String>) -> Self {
        self.show_plasmawave = true;
        self.name_plasmawave = name;
        self
    }

    /// Points both vendor endpoints at `server`.
    #[must_use]
    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        let server = server.into();
        self.status_server = Some(server.clone());
        self.control_server = Some(server);
        self
    }

    /// Display name of the purifier service.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Vendor device identifier, empty when missing.
    #[must_use]
    pub fn device_id(&self) -> &str {
        self.device_id.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn show_air_quality(&self) -> bool {
        self.show_air_quality
    }

    #[must_use]
    pub fn air_quality_name(&self) -> &str {
        &self.name_air_quality
    }

    #[must_use]
    pub fn show_plasmawave(&self) -> bool {
        self.show_plasmawave
    }

    /// Display name of the plasma-wave switch, `"{name} Plasmawave"` unless set.
    #[must_use]
    pub fn plasmawave_name(&self) -> String {
        self.name_plasmawave
            .clone()
            .unwrap_or_else(|| format!("{} Plasmawave", self.name))
    }

    /// Request timeout override.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Builds the transport configuration, applying any overrides.
    #[cfg(feature = "http")]
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        let mut config = HttpConfig::new();
        if let Some(server) = &self.status_server {
            config = config.with_status_server(server.clone());
        }
        if let Some(server) = &self.control_server {
            config = config.with_control_server(server.clone());
        }
        if let Some(timeout) = self.timeout() {
            config = config.with_timeout(timeout);
        }
        config
    }
}

/// Static identification shown by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessoryInformation {
    name: String,
    manufacturer: &'static str,
    model: &'static str,
}

impl AccessoryInformation {
    pub const MANUFACTURER: &'static str = "Winix";
    pub const MODEL: &'static str = "C545";

    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            manufacturer: Self::MANUFACTURER,
            model: Self::MODEL,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn manufacturer(&self) -> &str {
        self.manufacturer
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.model
    }
}
