// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ParseError;
use crate::types::StatusCode;

/// Envelope returned by `GET /homedevice/status/{deviceId}`.
///
/// # Examples
///
/// ```
/// use winix_lib::response::StatusResponse;
/// use winix_lib::types::StatusCode;
///
/// let json = r#"{"body": {"data": [{"attributes": {"A02": "1", "A04": "03"}}]}}"#;
/// let response: StatusResponse = serde_json::from_str(json).unwrap();
/// let record = response.into_device_record().unwrap();
/// assert_eq!(record.attributes().int(StatusCode::Power), 1);
/// assert_eq!(record.attributes().int(StatusCode::Speed), 3);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct StatusResponse {
    body: StatusBody,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusBody {
    #[serde(default)]
    data: Vec<DeviceRecord>,
}

impl StatusResponse {
    /// Returns the number of device records in the envelope.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.body.data.len()
    }

    /// Takes the first device record out of the envelope.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::MissingField` if the device list is empty.
    pub fn into_device_record(self) -> Result<DeviceRecord, ParseError> {
        self.body
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::MissingField("body.data[0]".to_string()))
    }
}

/// One device as reported by the status endpoint.
///
/// Besides `attributes`, the vendor includes metadata such as the device
/// model and a timestamp. Those fields are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(default)]
    attributes: AttributeMap,
    #[serde(flatten)]
    extra: serde_json::Map<String, Value>,
}

impl DeviceRecord {
    /// Creates a record holding only the given attributes.
    #[must_use]
    pub fn new(attributes: AttributeMap) -> Self {
        Self {
            attributes,
            extra: serde_json::Map::new(),
        }
    }

    /// Returns the attribute map.
    #[must_use]
    pub fn attributes(&self) -> &AttributeMap {
        &self.attributes
    }

    /// Returns a vendor field other than `attributes`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

/// Flat mapping from status code to its reported value.
///
/// Values arrive as strings (`"01"`) or numbers depending on firmware.
/// [`int`](Self::int) projects either form onto an integer and never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(HashMap<String, Value>);

impl AttributeMap {
    /// Creates an empty attribute map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw value, returning the previous one.
    pub fn insert(&mut self, code: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(code.into(), value.into())
    }

    /// Returns the raw value for a known status code.
    #[must_use]
    pub fn get(&self, code: StatusCode) -> Option<&Value> {
        self.0.get(code.as_str())
    }

    /// Returns the raw value for an arbitrary code string.
    #[must_use]
    pub fn get_raw(&self, code: &str) -> Option<&Value> {
        self.0.get(code)
    }

    /// Returns the integer value of a status code.
    ///
    /// Missing or unparseable values yield `0`.
    #[must_use]
    pub fn int(&self, code: StatusCode) -> i64 {
        self.get(code).map_or(0, lenient_int)
    }

    /// Returns the number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(code, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Projects a JSON value onto an integer.
///
/// Strings are read as an optional sign followed by leading decimal digits,
/// so `"02"` is 2 and `"3abc"` is 3. Everything else is 0.
fn lenient_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .unwrap_or_else(|| n.as_f64().map_or(0, truncate)),
        Value::String(s) => leading_int(s),
        _ => 0,
    }
}

// Fractional reports truncate toward zero; `as` saturates out-of-range values.
#[allow(clippy::cast_possible_truncation)]
fn truncate(f: f64) -> i64 {
    if f.is_finite() { f.trunc() as i64 } else { 0 }
}

fn leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let Ok(magnitude) = rest[..digits_len].parse::<i64>() else {
        return 0;
    };
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_status_envelope() {
        let json = r#"{
            "statusCode": 200,
            "body": {
                "deviceId": "abc",
                "totalCnt": 1,
                "data": [{
                    "apiNo": "A210",
                    "modelId": "C545",
                    "attributes": {"A02": "1", "A03": "02", "A04": "05", "A07": "0", "S07": "1"}
                }]
            }
        }"#;
        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.device_count(), 1);

        let record = response.into_device_record().unwrap();
        assert_eq!(record.field("modelId"), Some(&Value::from("C545")));

        let attrs = record.attributes();
        assert_eq!(attrs.len(), 5);
        assert_eq!(attrs.int(StatusCode::Power), 1);
        assert_eq!(attrs.int(StatusCode::Mode), 2);
        assert_eq!(attrs.int(StatusCode::Speed), 5);
        assert_eq!(attrs.int(StatusCode::Plasmawave), 0);
        assert_eq!(attrs.int(StatusCode::AirQuality), 1);
    }

    #[test]
    fn empty_device_list() {
        let response: StatusResponse =
            serde_json::from_str(r#"{"body": {"data": []}}"#).unwrap();
        let err = response.into_device_record().unwrap_err();
        assert!(matches!(err, ParseError::MissingField(_)));
    }

    #[test]
    fn missing_body_is_a_parse_error() {
        let result = serde_json::from_str::<StatusResponse>(r#"{"message": "nope"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn record_without_attributes() {
        let record: DeviceRecord = serde_json::from_str(r#"{"modelId": "C545"}"#).unwrap();
        assert!(record.attributes().is_empty());
        assert_eq!(record.attributes().int(StatusCode::Power), 0);
    }

    #[test]
    fn lenient_integer_projection() {
        let attrs: AttributeMap = [
            ("A02", Value::from("1")),
            ("A03", Value::from(" 01")),
            ("A04", Value::from("3abc")),
            ("A07", Value::from("on")),
            ("S07", Value::from(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(attrs.int(StatusCode::Power), 1);
        assert_eq!(attrs.int(StatusCode::Mode), 1);
        assert_eq!(attrs.int(StatusCode::Speed), 3);
        assert_eq!(attrs.int(StatusCode::Plasmawave), 0);
        assert_eq!(attrs.int(StatusCode::AirQuality), 2);
    }

    #[test]
    fn leading_int_edge_cases() {
        assert_eq!(leading_int(""), 0);
        assert_eq!(leading_int("-"), 0);
        assert_eq!(leading_int("-4"), -4);
        assert_eq!(leading_int("+7"), 7);
        assert_eq!(leading_int("99999999999999999999999"), 0);
        assert_eq!(lenient_int(&Value::from(2.9)), 2);
        assert_eq!(lenient_int(&Value::Bool(true)), 0);
        assert_eq!(lenient_int(&Value::Null), 0);
    }

    #[test]
    fn missing_code_defaults_to_zero() {
        let attrs = AttributeMap::new();
        assert_eq!(attrs.int(StatusCode::AirQuality), 0);
        assert!(attrs.get_raw("A02").is_none());
    }
}
