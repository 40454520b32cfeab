// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Winix cloud API.

use std::time::Duration;

use reqwest::Client;

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

// ============================================================================
// HttpConfig - Endpoint and transport settings
// ============================================================================

/// Configuration for the Winix cloud HTTP transport.
///
/// Status reads and control writes may live on different hosts; by default
/// both point at the US gateway.
///
/// # Examples
///
/// ```
/// use winix_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new()
///     .with_server("http://127.0.0.1:8080")
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(
///     config.status_url("abc"),
///     "http://127.0.0.1:8080/homedevice/status/abc"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    status_server: String,
    control_server: String,
    timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConfig {
    /// Default vendor gateway.
    pub const DEFAULT_SERVER: &'static str = "https://smart.us.gw.winixcorp.com";
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a configuration pointing at the default gateway.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status_server: Self::DEFAULT_SERVER.to_string(),
            control_server: Self::DEFAULT_SERVER.to_string(),
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Points both status reads and control writes at `server`.
    #[must_use]
    pub fn with_server(self, server: impl Into<String>) -> Self {
        let server = server.into();
        self.with_status_server(server.clone())
            .with_control_server(server)
    }

    /// Sets the server used for status reads.
    #[must_use]
    pub fn with_status_server(mut self, server: impl Into<String>) -> Self {
        self.status_server = normalize_server(server.into());
        self
    }

    /// Sets the server used for control writes.
    #[must_use]
    pub fn with_control_server(mut self, server: impl Into<String>) -> Self {
        self.control_server = normalize_server(server.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the status server base URL.
    #[must_use]
    pub fn status_server(&self) -> &str {
        &self.status_server
    }

    /// Returns the control server base URL.
    #[must_use]
    pub fn control_server(&self) -> &str {
        &self.control_server
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the status URL for a device.
    #[must_use]
    pub fn status_url(&self, device_id: &str) -> String {
        format!(
            "{}/homedevice/status/{}",
            self.status_server,
            urlencoding::encode(device_id)
        )
    }

    /// Builds the control URL for a device and a `{code}:{value}` segment.
    #[must_use]
    pub fn control_url(&self, device_id: &str, segment: &str) -> String {
        format!(
            "{}/homedevice/control/{}/{segment}",
            self.control_server,
            urlencoding::encode(device_id)
        )
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a server URL has no scheme or the HTTP client
    /// cannot be created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        for server in [&self.status_server, &self.control_server] {
            if !(server.starts_with("http://") || server.starts_with("https://")) {
                return Err(ProtocolError::InvalidAddress(server.clone()));
            }
        }

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient {
            config: self,
            client,
        })
    }
}

fn normalize_server(server: String) -> String {
    server.trim_end_matches('/').to_string()
}

// ============================================================================
// HttpClient
// ============================================================================

/// HTTP client for the Winix cloud.
///
/// Every call is one `GET`; a 2xx status is success and the body of
/// control responses is not inspected.
///
/// # Examples
///
/// ```no_run
/// use winix_lib::command::PowerCommand;
/// use winix_lib::protocol::{HttpClient, Protocol};
///
/// # async fn example() -> winix_lib::Result<()> {
/// let client = HttpClient::new()?;
/// client.send_command("my-device-id", &PowerCommand::on()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    config: HttpConfig,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the default gateway.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new() -> Result<Self, ProtocolError> {
        HttpConfig::new().into_client()
    }

    /// Returns the configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    async fn get(&self, url: &str) -> Result<CommandResponse, ProtocolError> {
        tracing::debug!(url = %url, "Sending HTTP request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        if !response.status().is_success() {
            return Err(ProtocolError::ConnectionFailed(format!(
                "HTTP {} - {}",
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }
}

impl Protocol for HttpClient {
    async fn get_status(&self, device_id: &str) -> Result<CommandResponse, ProtocolError> {
        self.get(&self.config.status_url(device_id)).await
    }

    async fn send_command<C: Command + Sync>(
        &self,
        device_id: &str,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        let url = self
            .config
            .control_url(device_id, &command.path_segment());
        self.get(&url).await
    }
}
