// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host-facing accessory.
//!
//! An [`Accessory`] bundles one [`Purifier`] with the services the host
//! registers: the air purifier itself, an optional plasma-wave switch, an
//! optional air quality sensor, and the identification block. The host
//! routes each characteristic read and write through [`Accessory::get`]
//! and [`Accessory::set`].
//!
//! ```no_run
//! use winix_lib::accessory::{Accessory, AccessoryConfig, Characteristic};
//!
//! # async fn example() -> winix_lib::Result<()> {
//! let config = AccessoryConfig::from_json(r#"{"deviceId": "852F2C1A_abc"}"#)?;
//! let accessory = Accessory::from_config(config).await?;
//!
//! let speed = accessory.get(Characteristic::RotationSpeed).await?;
//! accessory.set(Characteristic::Active, 1u8.into()).await?;
//! # let _ = speed;
//! # Ok(())
//! # }
//! ```

mod config;
mod service;

pub use config::{AccessoryConfig, AccessoryInformation};
pub use service::{Characteristic, CharacteristicValue, Service, ServiceKind};

use crate::device::Purifier;
use crate::error::{DeviceError, Result};
use crate::protocol::Protocol;
#[cfg(feature = "http")]
use crate::protocol::HttpClient;
use crate::types::{ActiveState, Plasmawave, RotationSpeed, TargetPurifierState};

/// One purifier as the host sees it.
#[derive(Debug)]
pub struct Accessory<P: Protocol> {
    purifier: Purifier<P>,
    config: AccessoryConfig,
    information: AccessoryInformation,
}

#[cfg(feature = "http")]
impl Accessory<HttpClient> {
    /// Validates `config`, builds the purifier and attempts discovery.
    ///
    /// A failed discovery does not fail construction; operations report
    /// [`Error::NotDiscovered`](crate::Error::NotDiscovered) until a later
    /// [`Purifier::discover`] succeeds.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration has no device identifier or the
    /// HTTP client cannot be created.
    pub async fn from_config(config: AccessoryConfig) -> Result<Self> {
        config.validate()?;
        let purifier = Purifier::http(config.device_id())
            .with_config(config.http_config())
            .build()
            .await?;
        Ok(Self::new(purifier, config))
    }
}

impl<P: Protocol> Accessory<P> {
    /// Wraps an existing purifier.
    pub fn new(purifier: Purifier<P>, config: AccessoryConfig) -> Self {
        let information = AccessoryInformation::new(config.name());
        Self {
            purifier,
            config,
            information,
        }
    }

    #[must_use]
    pub fn purifier(&self) -> &Purifier<P> {
        &self.purifier
    }

    #[must_use]
    pub fn config(&self) -> &AccessoryConfig {
        &self.config
    }

    #[must_use]
    pub fn information(&self) -> &AccessoryInformation {
        &self.information
    }

    /// Returns the services to register, in registration order.
    #[must_use]
    pub fn services(&self) -> Vec<Service> {
        let mut services = Vec::with_capacity(4);

        if self.config.show_plasmawave() {
            services.push(Service::new(
                ServiceKind::Switch,
                self.config.plasmawave_name(),
                vec![Characteristic::On],
            ));
        }
        services.push(Service::new(
            ServiceKind::AirPurifier,
            self.config.name(),
            vec![
                Characteristic::Active,
                Characteristic::CurrentAirPurifierState,
                Characteristic::TargetAirPurifierState,
                Characteristic::RotationSpeed,
            ],
        ));
        services.push(Service::new(
            ServiceKind::AccessoryInformation,
            self.information.name(),
            vec![
                Characteristic::Name,
                Characteristic::Manufacturer,
                Characteristic::Model,
            ],
        ));
        if self.config.show_air_quality() {
            services.push(Service::new(
                ServiceKind::AirQualitySensor,
                self.config.air_quality_name(),
                vec![Characteristic::AirQuality],
            ));
        }

        services
    }

    /// Returns whether any registered service carries `characteristic`.
    #[must_use]
    pub fn exposes(&self, characteristic: Characteristic) -> bool {
        self.services().iter().any(|s| s.has(characteristic))
    }

    /// Reads a characteristic in host encoding.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedCharacteristic`] if the
    /// characteristic is not exposed, otherwise whatever the purifier
    /// operation returns.
    pub async fn get(&self, characteristic: Characteristic) -> Result<CharacteristicValue> {
        self.ensure_exposed(characteristic)?;
        tracing::debug!(%characteristic, "Characteristic get");

        let value: CharacteristicValue = match characteristic {
            Characteristic::Active => self.purifier.get_active_state().await?.hap_value().into(),
            Characteristic::CurrentAirPurifierState => self
                .purifier
                .get_current_purifier_state()
                .await?
                .hap_value()
                .into(),
            Characteristic::TargetAirPurifierState => self
                .purifier
                .get_target_purifier_state()
                .await?
                .hap_value()
                .into(),
            Characteristic::RotationSpeed => {
                self.purifier.get_rotation_speed().await?.value().into()
            }
            Characteristic::AirQuality => self.purifier.get_air_quality().await?.hap_value().into(),
            Characteristic::On => self.purifier.get_plasmawave().await?.is_on().into(),
            Characteristic::Name => self.information.name().into(),
            Characteristic::Manufacturer => self.information.manufacturer().into(),
            Characteristic::Model => self.information.model().into(),
        };
        Ok(value)
    }

    /// Writes a characteristic given in host encoding.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnsupportedCharacteristic`] if the
    /// characteristic is not exposed, [`DeviceError::ReadOnly`] if it cannot
    /// be written, a value error if `value` does not fit, otherwise whatever
    /// the purifier operation returns.
    pub async fn set(
        &self,
        characteristic: Characteristic,
        value: CharacteristicValue,
    ) -> Result<()> {
        self.ensure_exposed(characteristic)?;
        if !characteristic.is_writable() {
            return Err(DeviceError::ReadOnly(characteristic.to_string()).into());
        }
        tracing::debug!(%characteristic, ?value, "Characteristic set");

        match characteristic {
            Characteristic::Active => {
                let state = ActiveState::from_hap(value.to_u8(characteristic)?)?;
                self.purifier.set_active_state(state).await
            }
            Characteristic::TargetAirPurifierState => {
                let state = TargetPurifierState::from_hap(value.to_u8(characteristic)?)?;
                self.purifier.set_target_purifier_state(state).await
            }
            Characteristic::RotationSpeed => {
                let speed = RotationSpeed::new(value.to_u8(characteristic)?)?;
                self.purifier.set_rotation_speed(speed).await
            }
            Characteristic::On => {
                let state = Plasmawave::from(value.to_bool(characteristic)?);
                self.purifier.set_plasmawave(state).await
            }
            other => Err(DeviceError::ReadOnly(other.to_string()).into()),
        }
    }

    /// Handles the host's identify request. The C545 has nothing to blink.
    ///
    /// # Errors
    ///
    /// Never fails.
    #[allow(clippy::unused_async)]
    pub async fn identify(&self) -> Result<()> {
        tracing::debug!(name = %self.config.name(), "Identify requested");
        Ok(())
    }

    fn ensure_exposed(&self, characteristic: Characteristic) -> Result<()> {
        if self.exposes(characteristic) {
            Ok(())
        } else {
            Err(DeviceError::UnsupportedCharacteristic(characteristic.to_string()).into())
        }
    }
}
