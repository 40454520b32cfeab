// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state management types.
//!
//! Two kinds of state live here:
//!
//! - [`DiscoveryState`] holds the last [`DeviceSnapshot`] fetched from the
//!   vendor, or nothing if the device has never answered.
//! - [`CharacteristicState`] holds the host-visible value of each
//!   characteristic, updated by successful gets and by eager sets.
//!
//! # Examples
//!
//! ```
//! use winix_lib::state::{CharacteristicState, StateChange};
//! use winix_lib::types::ActiveState;
//!
//! let mut state = CharacteristicState::new();
//! state.apply(&StateChange::Active(ActiveState::Active));
//!
//! assert_eq!(state.active(), Some(ActiveState::Active));
//! ```

mod characteristic_state;
mod snapshot;
mod state_change;

pub use characteristic_state::CharacteristicState;
pub use snapshot::{DeviceSnapshot, DiscoveryState};
pub use state_change::StateChange;
