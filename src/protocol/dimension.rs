// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Measurement dimension tags.

use std::fmt;

/// The measurement-kind tag carried by non-command frames.
///
/// Command frames carry a [`ModeCode`](super::ModeCode) instead; a frame has
/// one or the other, never both.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::Dimension;
///
/// assert_eq!(Dimension::from_value(14), Some(Dimension::Setpoint));
/// assert_eq!(Dimension::Setpoint.value(), 14);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(u16)]
pub enum Dimension {
    /// Measured zone temperature.
    Temperature = 0,
    /// Fan coil speed.
    FanCoilSpeed = 11,
    /// Zone target temperature (setpoint adjusted by the local offset).
    TargetTemperature = 12,
    /// Local knob offset.
    Offset = 13,
    /// Configured setpoint temperature.
    Setpoint = 14,
    /// Temperature measured by an external probe.
    ProbeTemperature = 15,
    /// Zone valve status.
    ValveStatus = 19,
    /// Actuator on/off status.
    ActuatorStatus = 20,
}

impl Dimension {
    /// Looks up a raw dimension tag.
    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Temperature),
            11 => Some(Self::FanCoilSpeed),
            12 => Some(Self::TargetTemperature),
            13 => Some(Self::Offset),
            14 => Some(Self::Setpoint),
            15 => Some(Self::ProbeTemperature),
            19 => Some(Self::ValveStatus),
            20 => Some(Self::ActuatorStatus),
            _ => None,
        }
    }

    /// Returns the raw wire tag.
    #[must_use]
    pub const fn value(&self) -> u16 {
        *self as u16
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_known_tags() {
        assert_eq!(Dimension::from_value(0), Some(Dimension::Temperature));
        assert_eq!(Dimension::from_value(12), Some(Dimension::TargetTemperature));
        assert_eq!(Dimension::from_value(13), Some(Dimension::Offset));
        assert_eq!(Dimension::from_value(15), Some(Dimension::ProbeTemperature));
        assert_eq!(Dimension::from_value(20), Some(Dimension::ActuatorStatus));
    }

    #[test]
    fn from_value_unknown_tag() {
        assert_eq!(Dimension::from_value(7), None);
        assert_eq!(Dimension::from_value(100), None);
    }
}
