// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local offset reported by the thermostat knob.
//!
//! Physical thermostats carry a small knob that trims the zone setpoint by a
//! few degrees or forces the zone off/local. The device reports the knob
//! position as an enumerated code; this module decodes it.

use std::fmt;

use crate::error::FrameError;

/// Position of the local adjustment knob on a physical thermostat.
///
/// # Examples
///
/// ```
/// use thermor_lib::types::LocalOffset;
///
/// let offset = LocalOffset::from_code("03").unwrap();
/// assert_eq!(offset, LocalOffset::Plus3);
/// assert_eq!(offset.label(), "+3");
///
/// assert!(LocalOffset::from_code("99").is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocalOffset {
    /// Knob at rest, no trim applied.
    #[default]
    Normal,
    /// Setpoint trimmed up by 3 degrees.
    Plus3,
    /// Setpoint trimmed down by 3 degrees.
    Minus3,
    /// Setpoint trimmed up by 6 degrees.
    Plus6,
    /// Setpoint trimmed down by 6 degrees.
    Minus6,
    /// Knob forced to local (anti-freeze) position.
    Local,
    /// Knob forced to off.
    Off,
}

impl LocalOffset {
    /// Decodes a wire offset code.
    ///
    /// Single-digit codes are accepted with or without the leading zero the
    /// bus usually pads them with.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::UnknownOffset`] for codes the protocol does not
    /// define.
    pub fn from_code(code: &str) -> Result<Self, FrameError> {
        match code {
            "00" | "0" => Ok(Self::Normal),
            "03" | "3" => Ok(Self::Plus3),
            "13" => Ok(Self::Minus3),
            "06" | "6" => Ok(Self::Plus6),
            "16" => Ok(Self::Minus6),
            "04" | "4" => Ok(Self::Local),
            "05" | "5" => Ok(Self::Off),
            other => Err(FrameError::UnknownOffset(other.to_string())),
        }
    }

    /// Returns the two-digit wire code for this position.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Normal => "00",
            Self::Plus3 => "03",
            Self::Minus3 => "13",
            Self::Plus6 => "06",
            Self::Minus6 => "16",
            Self::Local => "04",
            Self::Off => "05",
        }
    }

    /// Returns the channel label for this position.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Plus3 => "+3",
            Self::Minus3 => "-3",
            Self::Plus6 => "+6",
            Self::Minus6 => "-6",
            Self::Local => "LOCAL",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for LocalOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_from_code() {
        assert_eq!(LocalOffset::from_code("00").unwrap(), LocalOffset::Normal);
        assert_eq!(LocalOffset::from_code("03").unwrap(), LocalOffset::Plus3);
        assert_eq!(LocalOffset::from_code("13").unwrap(), LocalOffset::Minus3);
        assert_eq!(LocalOffset::from_code("06").unwrap(), LocalOffset::Plus6);
        assert_eq!(LocalOffset::from_code("16").unwrap(), LocalOffset::Minus6);
        assert_eq!(LocalOffset::from_code("04").unwrap(), LocalOffset::Local);
        assert_eq!(LocalOffset::from_code("05").unwrap(), LocalOffset::Off);
    }

    #[test]
    fn offset_from_unpadded_code() {
        assert_eq!(LocalOffset::from_code("0").unwrap(), LocalOffset::Normal);
        assert_eq!(LocalOffset::from_code("4").unwrap(), LocalOffset::Local);
        assert_eq!(LocalOffset::from_code("5").unwrap(), LocalOffset::Off);
    }

    #[test]
    fn offset_from_code_unrecognized() {
        let result = LocalOffset::from_code("99");
        assert_eq!(
            result.unwrap_err(),
            FrameError::UnknownOffset("99".to_string())
        );
        assert!(LocalOffset::from_code("").is_err());
    }

    #[test]
    fn offset_roundtrip_through_code() {
        for offset in [
            LocalOffset::Normal,
            LocalOffset::Plus3,
            LocalOffset::Minus3,
            LocalOffset::Plus6,
            LocalOffset::Minus6,
            LocalOffset::Local,
            LocalOffset::Off,
        ] {
            assert_eq!(LocalOffset::from_code(offset.code()).unwrap(), offset);
        }
    }

    #[test]
    fn offset_labels() {
        assert_eq!(LocalOffset::Normal.label(), "NORMAL");
        assert_eq!(LocalOffset::Plus3.label(), "+3");
        assert_eq!(LocalOffset::Minus6.label(), "-6");
        assert_eq!(LocalOffset::Off.to_string(), "OFF");
    }
}
