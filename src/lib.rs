// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `winix_lib` - A Rust library to control Winix C545 air purifiers.
//!
//! The purifier is reached through the Winix cloud, which exposes a status
//! endpoint returning the device's attribute map and a control endpoint
//! that writes one attribute per request. This crate maps those attributes
//! onto air purifier characteristics a home automation host understands.
//!
//! # Supported Characteristics
//!
//! - **Active**: power on/off (`A02`)
//! - **Current state**: inactive or purifying, derived from power
//! - **Target state**: auto or manual mode (`A03`)
//! - **Rotation speed**: 0-100, bucketed onto four fan levels (`A04`)
//! - **Air quality**: good, fair, poor or unknown (`S07`)
//! - **Plasma-wave**: ioniser switch (`A07`)
//!
//! # Quick Start
//!
//! ```no_run
//! use winix_lib::Purifier;
//! use winix_lib::types::{RotationSpeed, TargetPurifierState};
//!
//! #[tokio::main]
//! async fn main() -> winix_lib::Result<()> {
//!     // Fetches the device once; a failure is logged and retried on demand
//!     let purifier = Purifier::http("852F2C1A_abc").build().await?;
//!
//!     println!("air quality: {}", purifier.get_air_quality().await?);
//!
//!     purifier.set_target_purifier_state(TargetPurifierState::Manual).await?;
//!     purifier.set_rotation_speed(RotationSpeed::new(80)?).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Host Integration
//!
//! [`accessory::Accessory`] exposes the services and characteristic
//! dispatch a host registers, built from the host's JSON configuration:
//!
//! ```no_run
//! use winix_lib::accessory::{Accessory, AccessoryConfig, Characteristic};
//! use winix_lib::subscription::Subscribable;
//!
//! #[tokio::main]
//! async fn main() -> winix_lib::Result<()> {
//!     let config = AccessoryConfig::from_json(
//!         r#"{"deviceId": "852F2C1A_abc", "showAirQuality": true}"#,
//!     )?;
//!     let accessory = Accessory::from_config(config).await?;
//!
//!     accessory.purifier().on_active_changed(|state| {
//!         println!("purifier is now {state}");
//!     });
//!
//!     let quality = accessory.get(Characteristic::AirQuality).await?;
//!     println!("{quality:?}");
//!     Ok(())
//! }
//! ```

pub mod accessory;
pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod state;
pub mod subscription;
pub mod types;

pub use command::{Command, ModeCommand, PlasmawaveCommand, PowerCommand, SpeedCommand};
#[cfg(feature = "http")]
pub use device::PurifierBuilder;
pub use device::{DiscoveryPolicy, Purifier};
pub use error::{ConfigError, DeviceError, Error, ParseError, ProtocolError, Result, ValueError};
#[cfg(feature = "http")]
pub use protocol::{HttpClient, HttpConfig};
pub use response::{AttributeMap, DeviceRecord, StatusResponse};
pub use subscription::{CallbackRegistry, Subscribable, SubscriptionId};
pub use types::{
    ActiveState, AirQuality, CurrentPurifierState, FanSpeed, Plasmawave, RotationSpeed,
    StatusCode, TargetPurifierState,
};
