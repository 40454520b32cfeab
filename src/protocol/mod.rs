// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport to the Winix cloud API.
//!
//! The vendor exposes two pull-style endpoints, both plain `GET`s:
//!
//! - `/homedevice/status/{deviceId}` returns the device record
//! - `/homedevice/control/{deviceId}/{code}:{value}` writes one attribute
//!
//! [`Protocol`] abstracts the transport so the adapter can be driven by
//! [`HttpClient`] in production and by a stand-in in tests.

#[cfg(feature = "http")]
mod http;
#[cfg(test)]
pub(crate) mod mock;

#[cfg(feature = "http")]
pub use http::{HttpClient, HttpConfig};

use crate::command::Command;
use crate::error::ProtocolError;

/// Raw response body from the vendor API.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, crate::error::ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}

/// Trait for transports that can reach the Winix cloud.
///
/// Each call is a single request: implementations must not retry.
#[allow(async_fn_in_trait)]
pub trait Protocol {
    /// Reads the status envelope of a device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the server answers
    /// with a non-success status.
    async fn get_status(&self, device_id: &str) -> Result<CommandResponse, ProtocolError>;

    /// Sends a control command to a device.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request fails or the server answers
    /// with a non-success status.
    async fn send_command<C: Command + Sync>(
        &self,
        device_id: &str,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError>;
}
