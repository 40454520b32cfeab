// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for characteristic changes.
//!
//! The vendor API has no event feed, so changes only surface when the
//! adapter itself learns a new value: a get returns something different
//! from before, a set succeeds and is recorded eagerly, or a status fetch
//! replaces the device snapshot. Subscriptions let a host integration push
//! those values to its own characteristic objects.
//!
//! - [`SubscriptionId`] - A unique identifier for a subscription
//! - [`CallbackRegistry`] - Registry that stores callbacks and dispatches changes
//! - [`Subscribable`] - Trait for types that support subscriptions
//!
//! # Usage
//!
//! ```no_run
//! use winix_lib::Purifier;
//! use winix_lib::subscription::Subscribable;
//!
//! # async fn example() -> winix_lib::Result<()> {
//! let purifier = Purifier::http("my-device-id").build().await?;
//!
//! let sub_id = purifier.on_active_changed(|state| {
//!     println!("Active is now {state}");
//! });
//!
//! purifier.unsubscribe(sub_id);
//! # Ok(())
//! # }
//! ```

mod callback;
mod subscribable;

pub use callback::{CallbackRegistry, SubscriptionId};
pub use subscribable::Subscribable;
