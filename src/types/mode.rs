// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating mode of a thermoregulation device.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when parsing an operating-mode name fails.
///
/// Only the four commandable modes parse; `"UNKNOWN"` and any other string
/// are rejected so that a platform command can never inject the unknown
/// state into a device.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unrecognized operating mode: {0:?}")]
pub struct ParseOperatingModeError(pub String);

/// Operating regime of a thermostat, independent of the heating/cooling
/// direction.
///
/// The regime and the [`ThermalFunction`](super::ThermalFunction) together
/// select one wire-level mode code; neither alone is enough.
///
/// # Examples
///
/// ```
/// use thermor_lib::types::OperatingMode;
///
/// let mode: OperatingMode = "MANUAL".parse().unwrap();
/// assert_eq!(mode, OperatingMode::Manual);
/// assert_eq!(mode.as_str(), "MANUAL");
///
/// // Parsing is exact and case-sensitive
/// assert!("manual".parse::<OperatingMode>().is_err());
/// assert!("UNKNOWN".parse::<OperatingMode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperatingMode {
    /// The device has not reported a mode yet.
    #[default]
    Unknown,
    /// Following the programmed schedule.
    Auto,
    /// Holding a manually chosen setpoint.
    Manual,
    /// Anti-freeze / thermal protection.
    Protection,
    /// Regulation switched off.
    Off,
}

impl OperatingMode {
    /// Returns the channel label for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Auto => "AUTO",
            Self::Manual => "MANUAL",
            Self::Protection => "PROTECTION",
            Self::Off => "OFF",
        }
    }

    /// Returns `true` for the four modes a platform command may carry.
    #[must_use]
    pub const fn is_commandable(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OperatingMode {
    type Err = ParseOperatingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AUTO" => Ok(Self::Auto),
            "MANUAL" => Ok(Self::Manual),
            "PROTECTION" => Ok(Self::Protection),
            "OFF" => Ok(Self::Off),
            other => Err(ParseOperatingModeError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_as_str() {
        assert_eq!(OperatingMode::Unknown.as_str(), "UNKNOWN");
        assert_eq!(OperatingMode::Auto.as_str(), "AUTO");
        assert_eq!(OperatingMode::Manual.as_str(), "MANUAL");
        assert_eq!(OperatingMode::Protection.as_str(), "PROTECTION");
        assert_eq!(OperatingMode::Off.as_str(), "OFF");
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("AUTO".parse::<OperatingMode>().unwrap(), OperatingMode::Auto);
        assert_eq!(
            "PROTECTION".parse::<OperatingMode>().unwrap(),
            OperatingMode::Protection
        );
        assert_eq!("OFF".parse::<OperatingMode>().unwrap(), OperatingMode::Off);
    }

    #[test]
    fn mode_from_str_is_case_sensitive() {
        assert!("auto".parse::<OperatingMode>().is_err());
        assert!("Manual".parse::<OperatingMode>().is_err());
        assert!("off".parse::<OperatingMode>().is_err());
    }

    #[test]
    fn mode_from_str_rejects_unknown() {
        let result = "UNKNOWN".parse::<OperatingMode>();
        assert_eq!(
            result.unwrap_err(),
            ParseOperatingModeError("UNKNOWN".to_string())
        );
    }

    #[test]
    fn mode_from_str_rejects_garbage() {
        assert!("BOGUS".parse::<OperatingMode>().is_err());
        assert!(String::new().parse::<OperatingMode>().is_err());
    }

    #[test]
    fn commandable_modes() {
        assert!(OperatingMode::Auto.is_commandable());
        assert!(OperatingMode::Off.is_commandable());
        assert!(!OperatingMode::Unknown.is_commandable());
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(OperatingMode::default(), OperatingMode::Unknown);
    }
}
