// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory transport for unit tests.

use std::collections::VecDeque;

use parking_lot::Mutex;
use serde_json::{Value, json};

use crate::command::Command;
use crate::error::ProtocolError;
use crate::protocol::{CommandResponse, Protocol};

/// Scripted transport that records every request.
///
/// Queued status responses are served in order; the last one is repeated.
#[derive(Debug, Default)]
pub(crate) struct MockProtocol {
    statuses: Mutex<VecDeque<Result<String, u16>>>,
    command_failure: Mutex<Option<u16>>,
    requests: Mutex<Vec<String>>,
}

impl MockProtocol {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a status envelope wrapping `attributes`.
    pub(crate) fn with_attributes(self, attributes: Value) -> Self {
        self.push_attributes(attributes);
        self
    }

    pub(crate) fn push_attributes(&self, attributes: Value) {
        let body = json!({ "body": { "data": [ { "attributes": attributes } ] } });
        self.statuses.lock().push_back(Ok(body.to_string()));
    }

    pub(crate) fn push_raw_status(&self, body: &str) {
        self.statuses.lock().push_back(Ok(body.to_string()));
    }

    pub(crate) fn push_status_failure(&self, status: u16) {
        self.statuses.lock().push_back(Err(status));
    }

    pub(crate) fn fail_commands(&self, status: u16) {
        *self.command_failure.lock() = Some(status);
    }

    pub(crate) fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

fn http_failure(status: u16) -> ProtocolError {
    ProtocolError::ConnectionFailed(format!("HTTP {status}"))
}

impl Protocol for MockProtocol {
    async fn get_status(&self, device_id: &str) -> Result<CommandResponse, ProtocolError> {
        self.requests.lock().push(format!("status/{device_id}"));

        let mut statuses = self.statuses.lock();
        let next = if statuses.len() > 1 {
            statuses.pop_front()
        } else {
            statuses.front().cloned()
        };
        match next {
            Some(Ok(body)) => Ok(CommandResponse::new(body)),
            Some(Err(status)) => Err(http_failure(status)),
            None => Err(ProtocolError::ConnectionFailed("no status queued".to_string())),
        }
    }

    async fn send_command<C: Command + Sync>(
        &self,
        device_id: &str,
        command: &C,
    ) -> Result<CommandResponse, ProtocolError> {
        self.requests
            .lock()
            .push(format!("control/{device_id}/{}", command.path_segment()));

        match *self.command_failure.lock() {
            Some(status) => Err(http_failure(status)),
            None => Ok(CommandResponse::new("{}".to_string())),
        }
    }
}
