// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Temperature units for inbound setpoint commands.

use std::fmt;

/// Unit attached to a quantity-bearing setpoint command.
///
/// The bus protocol only speaks Celsius; commands carrying another unit are
/// converted before a request is built.
///
/// # Examples
///
/// ```
/// use thermor_lib::types::TemperatureUnit;
///
/// let celsius = TemperatureUnit::Fahrenheit.to_celsius(70.7);
/// assert!((celsius - 21.5).abs() < 1e-9);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize,
)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[default]
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
}

impl TemperatureUnit {
    /// Converts a value in this unit to degrees Celsius.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Returns the unit symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_passes_through() {
        assert!((TemperatureUnit::Celsius.to_celsius(21.5) - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn fahrenheit_converts() {
        assert!((TemperatureUnit::Fahrenheit.to_celsius(32.0)).abs() < 1e-9);
        assert!((TemperatureUnit::Fahrenheit.to_celsius(212.0) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn unit_symbols() {
        assert_eq!(TemperatureUnit::Celsius.symbol(), "°C");
        assert_eq!(TemperatureUnit::Fahrenheit.symbol(), "°F");
    }
}
