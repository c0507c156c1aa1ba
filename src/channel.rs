// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Platform channel surface.
//!
//! A channel is a named data point the host platform exposes for a device:
//! commands arrive addressed to a channel, state updates are published back
//! against one. The identifiers are a closed set; unknown channels reaching
//! the handler are logged and ignored, never errors.

use std::fmt;

use crate::types::TemperatureUnit;

/// Identifier of a platform channel this library reads or writes.
///
/// Central-unit devices publish setpoint and set-mode state on the
/// all-devices variants; ordinary zone devices use the per-device ones.
///
/// # Examples
///
/// ```
/// use thermor_lib::channel::ChannelId;
///
/// assert_eq!(ChannelId::Temperature.as_str(), "temperature");
/// assert_eq!(ChannelId::AllSetpoint.as_str(), "allSetpointTemperature");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ChannelId {
    /// Measured zone temperature.
    Temperature,
    /// Per-device setpoint temperature.
    Setpoint,
    /// All-devices setpoint temperature (central unit).
    AllSetpoint,
    /// Zone target temperature.
    TargetTemperature,
    /// Mode the device is actually running.
    ActiveMode,
    /// Per-device configured mode.
    SetMode,
    /// All-devices configured mode (central unit).
    AllSetMode,
    /// Local knob offset.
    LocalMode,
    /// Thermal function the device drives.
    ThermalFunction,
    /// Derived heating/cooling summary.
    HeatingCooling,
}

impl ChannelId {
    /// Returns the platform identifier string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Setpoint => "setpointTemperature",
            Self::AllSetpoint => "allSetpointTemperature",
            Self::TargetTemperature => "targetTemperature",
            Self::ActiveMode => "activeMode",
            Self::SetMode => "setMode",
            Self::AllSetMode => "allSetMode",
            Self::LocalMode => "localMode",
            Self::ThermalFunction => "thermoFunction",
            Self::HeatingCooling => "heatingCoolingMode",
        }
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value published to a channel.
///
/// `Undefined` is an explicit marker, published when an inbound payload
/// cannot be decoded so that downstream consumers see "no valid value"
/// instead of stale data.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub enum ChannelValue {
    /// A decimal reading, in degrees Celsius for temperature channels.
    Decimal(f64),
    /// An enumerated state label.
    Label(&'static str),
    /// No valid value is available.
    Undefined,
}

impl ChannelValue {
    /// Returns `true` if this is the explicit undefined marker.
    #[must_use]
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl fmt::Display for ChannelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Label(label) => write!(f, "{label}"),
            Self::Undefined => write!(f, "UNDEF"),
        }
    }
}

/// A command received from the platform, addressed to a channel.
///
/// The variant is decided once at the platform boundary; the handler's
/// routing and normalization never inspect payload types again.
///
/// # Examples
///
/// ```
/// use thermor_lib::channel::ChannelCommand;
/// use thermor_lib::types::TemperatureUnit;
///
/// let quantity = ChannelCommand::celsius(21.5);
/// let bare = ChannelCommand::Decimal(21.5);
/// let mode = ChannelCommand::text("MANUAL");
///
/// assert_eq!(
///     quantity,
///     ChannelCommand::Quantity { value: 21.5, unit: TemperatureUnit::Celsius }
/// );
/// assert_eq!(mode, ChannelCommand::Text("MANUAL".to_string()));
/// # let _ = bare;
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ChannelCommand {
    /// A unit-bearing quantity.
    Quantity {
        /// Numeric value in `unit`.
        value: f64,
        /// Unit the value is expressed in.
        unit: TemperatureUnit,
    },
    /// A bare decimal, implicitly Celsius for setpoint channels.
    Decimal(f64),
    /// A string command, used for mode names.
    Text(String),
}

impl ChannelCommand {
    /// Creates a Celsius quantity command.
    #[must_use]
    pub const fn celsius(value: f64) -> Self {
        Self::Quantity {
            value,
            unit: TemperatureUnit::Celsius,
        }
    }

    /// Creates a Fahrenheit quantity command.
    #[must_use]
    pub const fn fahrenheit(value: f64) -> Self {
        Self::Quantity {
            value,
            unit: TemperatureUnit::Fahrenheit,
        }
    }

    /// Creates a text command.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// Receiver for channel-state updates.
///
/// Implemented by the host platform; publishing is an in-memory state
/// update on the host side and is assumed not to fail.
pub trait StateSink {
    /// Publishes `value` as the current state of `channel`.
    fn publish(&self, channel: ChannelId, value: ChannelValue);
}
