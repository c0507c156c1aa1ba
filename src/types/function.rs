// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Thermal function of a thermoregulation device.

use std::fmt;

/// Which physical plant a device currently drives: a heating plant, a
/// cooling plant, or a single generic plant that does both.
///
/// Orthogonal to [`OperatingMode`](super::OperatingMode): the wire protocol
/// qualifies every mode code with a function tag, so the cached function is
/// needed to encode an outbound mode write.
///
/// # Examples
///
/// ```
/// use thermor_lib::types::ThermalFunction;
///
/// assert_eq!(ThermalFunction::Heat.as_str(), "HEAT");
/// assert_eq!(ThermalFunction::default(), ThermalFunction::Unknown);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThermalFunction {
    /// The device has not reported a function yet.
    #[default]
    Unknown,
    /// Conditioning (cooling) plant.
    Cool,
    /// Heating plant.
    Heat,
    /// A single plant serving both directions.
    Generic,
}

impl ThermalFunction {
    /// Returns the channel label for this function.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Cool => "COOL",
            Self::Heat => "HEAT",
            Self::Generic => "GENERIC",
        }
    }
}

impl fmt::Display for ThermalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
