// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `winix_lib` library.
//!
//! This module provides the error hierarchy for the adapter: value
//! validation, transport failures against the Winix cloud, response
//! parsing, characteristic dispatch and accessory configuration.
//!
//! Malformed or unknown attribute values reported by the device are not
//! errors. They degrade to neutral defaults (`0`, [`AirQuality::Unknown`])
//! so that unexpected firmware states never break the integration.
//!
//! [`AirQuality::Unknown`]: crate::types::AirQuality::Unknown

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// No status has been fetched successfully yet.
    ///
    /// Every characteristic get/set fails with this error, without touching
    /// the network, until the device has been discovered.
    #[error("No Air Purifier is discovered")]
    NotDiscovered,

    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The HTTP request to the vendor API failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The status response could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A characteristic operation is not possible on this accessory.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The accessory configuration is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i64,
        /// Maximum allowed value.
        max: i64,
        /// The actual value that was provided.
        actual: i64,
    },

    /// An unknown vendor status code was provided.
    #[error("invalid status code: {0}")]
    InvalidStatusCode(String),

    /// A characteristic value of the wrong kind was provided.
    #[error("invalid value for {characteristic}: {value}")]
    InvalidCharacteristicValue {
        /// The characteristic being written.
        characteristic: String,
        /// Debug rendering of the rejected value.
        value: String,
    },
}

/// Errors related to HTTP communication with the vendor API.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing vendor status responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),
}

/// Errors related to characteristic dispatch on an accessory.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The characteristic is not exposed by this accessory.
    #[error("characteristic {0} is not exposed by this accessory")]
    UnsupportedCharacteristic(String),

    /// The characteristic cannot be written.
    #[error("characteristic {0} is read-only")]
    ReadOnly(String),
}

/// Errors related to accessory configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The device identifier is missing or empty.
    #[error("you must provide the deviceId of the air purifier")]
    MissingDeviceId,

    /// A request timeout of zero seconds was configured.
    #[error("timeoutSecs must be greater than zero")]
    ZeroTimeout,

    /// The configuration document is not valid JSON.
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
