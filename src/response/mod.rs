// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for the Winix status endpoint.
//!
//! The status endpoint wraps the device record in an envelope:
//!
//! ```json
//! { "body": { "data": [ { "attributes": { "A02": "1", "S07": "2" } } ] } }
//! ```
//!
//! [`StatusResponse`] models the envelope, [`DeviceRecord`] the first
//! element of `data`, and [`AttributeMap`] its `attributes` object.

mod status;

pub use status::{AttributeMap, DeviceRecord, StatusResponse};
