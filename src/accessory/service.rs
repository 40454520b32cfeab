// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Host services, characteristics and their values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// Kind of service exposed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    AirPurifier,
    Switch,
    AirQualitySensor,
    AccessoryInformation,
}

/// A characteristic the accessory can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    Active,
    CurrentAirPurifierState,
    TargetAirPurifierState,
    RotationSpeed,
    AirQuality,
    /// Plasma-wave switch state.
    On,
    Name,
    Manufacturer,
    Model,
}

impl Characteristic {
    /// Returns the host name of the characteristic.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::CurrentAirPurifierState => "CurrentAirPurifierState",
            Self::TargetAirPurifierState => "TargetAirPurifierState",
            Self::RotationSpeed => "RotationSpeed",
            Self::AirQuality => "AirQuality",
            Self::On => "On",
            Self::Name => "Name",
            Self::Manufacturer => "Manufacturer",
            Self::Model => "Model",
        }
    }

    /// Returns whether the host may write this characteristic.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        matches!(
            self,
            Self::Active | Self::TargetAirPurifierState | Self::RotationSpeed | Self::On
        )
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A characteristic value in the host's encoding.
///
/// Enumerated characteristics use their HAP numeric values, e.g.
/// `AirQuality` Good is `UInt8(2)` and Poor is `UInt8(5)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CharacteristicValue {
    Bool(bool),
    UInt8(u8),
    String(String),
}

impl CharacteristicValue {
    /// Reads the value as an integer characteristic.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidCharacteristicValue`] for non-integers.
    pub fn to_u8(&self, characteristic: Characteristic) -> Result<u8, ValueError> {
        match self {
            Self::UInt8(v) => Ok(*v),
            other => Err(other.invalid_for(characteristic)),
        }
    }

    /// Reads the value as a boolean; integers are true when nonzero.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidCharacteristicValue`] for strings.
    pub fn to_bool(&self, characteristic: Characteristic) -> Result<bool, ValueError> {
        match self {
            Self::Bool(v) => Ok(*v),
            Self::UInt8(v) => Ok(*v != 0),
            other @ Self::String(_) => Err(other.invalid_for(characteristic)),
        }
    }

    fn invalid_for(&self, characteristic: Characteristic) -> ValueError {
        ValueError::InvalidCharacteristicValue {
            characteristic: characteristic.to_string(),
            value: format!("{self:?}"),
        }
    }
}

impl From<bool> for CharacteristicValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<u8> for CharacteristicValue {
    fn from(v: u8) -> Self {
        Self::UInt8(v)
    }
}

impl From<&str> for CharacteristicValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

/// A named group of characteristics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    kind: ServiceKind,
    name: String,
    characteristics: Vec<Characteristic>,
}

impl Service {
    pub(crate) fn new(
        kind: ServiceKind,
        name: impl Into<String>,
        characteristics: Vec<Characteristic>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            characteristics,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ServiceKind {
        self.kind
    }

    /// Display name shown by the host.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    #[must_use]
    pub fn has(&self, characteristic: Characteristic) -> bool {
        self.characteristics.contains(&characteristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writable_characteristics() {
        assert!(Characteristic::Active.is_writable());
        assert!(Characteristic::On.is_writable());
        assert!(!Characteristic::CurrentAirPurifierState.is_writable());
        assert!(!Characteristic::AirQuality.is_writable());
        assert!(!Characteristic::Manufacturer.is_writable());
    }

    #[test]
    fn value_conversions() {
        let speed = Characteristic::RotationSpeed;
        assert_eq!(CharacteristicValue::from(40u8).to_u8(speed), Ok(40));
        assert!(CharacteristicValue::from(true).to_u8(speed).is_err());

        let on = Characteristic::On;
        assert_eq!(CharacteristicValue::from(true).to_bool(on), Ok(true));
        assert_eq!(CharacteristicValue::from(0u8).to_bool(on), Ok(false));
        assert!(matches!(
            CharacteristicValue::from("yes").to_bool(on),
            Err(ValueError::InvalidCharacteristicValue { .. })
        ));
    }

    #[test]
    fn values_serialize_untagged() {
        assert_eq!(
            serde_json::to_string(&CharacteristicValue::UInt8(5)).unwrap(),
            "5"
        );
        assert_eq!(
            serde_json::from_str::<CharacteristicValue>("true").unwrap(),
            CharacteristicValue::Bool(true)
        );
    }
}
