// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire temperature codec.
//!
//! Temperatures travel on the bus as four-digit fields: a sign digit (`0`
//! positive, `1` negative) followed by the value in tenths of a degree
//! Celsius. `0215` is 21.5 °C, `1050` is -5.0 °C.

use std::fmt;

use crate::error::{FrameError, RequestError};

/// A temperature field exactly as it appeared on the wire.
///
/// Inbound frames keep the raw text so that decoding failures can be
/// reported against the original field, not a lossy intermediate.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::WireTemperature;
///
/// let temp = WireTemperature::new("0215");
/// assert!((temp.to_celsius().unwrap() - 21.5).abs() < 1e-9);
///
/// let below_zero = WireTemperature::new("1050");
/// assert!((below_zero.to_celsius().unwrap() + 5.0).abs() < 1e-9);
///
/// assert!(WireTemperature::new("21.5").to_celsius().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct WireTemperature(String);

impl WireTemperature {
    /// Wraps a raw wire field without validating it.
    ///
    /// Validation happens in [`Self::to_celsius`] so that a malformed field
    /// can still be carried through dispatch and reported where it matters.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Encodes a Celsius value into the wire format.
    ///
    /// The value is rounded to the nearest tenth of a degree.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnrepresentableTemperature`] for non-finite
    /// values or magnitudes beyond 99.9 °C.
    pub fn from_celsius(celsius: f64) -> Result<Self, RequestError> {
        if !celsius.is_finite() {
            return Err(RequestError::UnrepresentableTemperature(celsius));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let tenths = (celsius.abs() * 10.0).round() as u32;
        if tenths > 999 {
            return Err(RequestError::UnrepresentableTemperature(celsius));
        }
        let sign = u8::from(celsius < 0.0 && tenths > 0);
        Ok(Self(format!("{sign}{tenths:03}")))
    }

    /// Returns the raw wire field.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Decodes the field into degrees Celsius.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidTemperature`] if the field is not four
    /// ASCII digits with a valid sign digit.
    pub fn to_celsius(&self) -> Result<f64, FrameError> {
        let invalid = || FrameError::InvalidTemperature(self.0.clone());
        let bytes = self.0.as_bytes();
        if bytes.len() != 4 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(invalid());
        }
        let sign = match bytes[0] {
            b'0' => 1.0,
            b'1' => -1.0,
            _ => return Err(invalid()),
        };
        let tenths: f64 = self.0[1..].parse::<u16>().map_err(|_| invalid())?.into();
        Ok(sign * tenths / 10.0)
    }
}

impl fmt::Display for WireTemperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celsius(raw: &str) -> f64 {
        WireTemperature::new(raw).to_celsius().unwrap()
    }

    #[test]
    fn decode_positive() {
        assert!((celsius("0215") - 21.5).abs() < 1e-9);
        assert!((celsius("0000")).abs() < 1e-9);
        assert!((celsius("0999") - 99.9).abs() < 1e-9);
    }

    #[test]
    fn decode_negative() {
        assert!((celsius("1050") + 5.0).abs() < 1e-9);
        assert!((celsius("1003") + 0.3).abs() < 1e-9);
    }

    #[test]
    fn decode_rejects_malformed_fields() {
        for raw in ["", "215", "02150", "21.5", "2215", "0a15"] {
            let result = WireTemperature::new(raw).to_celsius();
            assert_eq!(
                result.unwrap_err(),
                FrameError::InvalidTemperature(raw.to_string())
            );
        }
    }

    #[test]
    fn encode_positive() {
        assert_eq!(WireTemperature::from_celsius(21.5).unwrap().raw(), "0215");
        assert_eq!(WireTemperature::from_celsius(5.0).unwrap().raw(), "0050");
    }

    #[test]
    fn encode_negative() {
        assert_eq!(WireTemperature::from_celsius(-5.0).unwrap().raw(), "1050");
    }

    #[test]
    fn encode_rounds_to_tenths() {
        assert_eq!(WireTemperature::from_celsius(21.44).unwrap().raw(), "0214");
        assert_eq!(WireTemperature::from_celsius(21.46).unwrap().raw(), "0215");
    }

    #[test]
    fn encode_negative_zero_is_positive() {
        assert_eq!(WireTemperature::from_celsius(-0.0).unwrap().raw(), "0000");
        assert_eq!(WireTemperature::from_celsius(-0.01).unwrap().raw(), "0000");
    }

    #[test]
    fn encode_rejects_unrepresentable() {
        assert!(WireTemperature::from_celsius(f64::NAN).is_err());
        assert!(WireTemperature::from_celsius(f64::INFINITY).is_err());
        assert!(WireTemperature::from_celsius(100.0).is_err());
        assert!(WireTemperature::from_celsius(-100.0).is_err());
    }

    #[test]
    fn roundtrip_through_wire() {
        for value in [0.0, 21.5, 35.0, -3.5, 99.9, -99.9] {
            let encoded = WireTemperature::from_celsius(value).unwrap();
            assert!((encoded.to_celsius().unwrap() - value).abs() < 1e-9);
        }
    }
}
