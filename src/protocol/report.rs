// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classified inbound reports.
//!
//! A report is an already-parsed frame reduced to the fields the handler
//! cares about. The enum is closed on purpose: the event router matches it
//! exhaustively, so a new report kind cannot be dropped without an explicit
//! decision in the router.

use super::{Dimension, ModeCode, WireTemperature};

/// An inbound frame classified by its command/measurement tag.
///
/// Command frames carry a mode code; measurement frames carry a dimension
/// tag and a raw value. Temperature payloads stay in wire form so that
/// decoding failures surface where the value is consumed.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::{Dimension, ModeCode, ThermoReport};
///
/// // A command frame reporting "program heating"
/// let report = ThermoReport::classify(Some(ModeCode::ProgramHeating), None, None);
/// assert_eq!(report, Some(ThermoReport::Mode(ModeCode::ProgramHeating)));
///
/// // A measured-temperature frame
/// let report = ThermoReport::classify(None, Some(Dimension::Temperature), Some("0215"));
/// assert!(matches!(report, Some(ThermoReport::Temperature(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ThermoReport {
    /// Command frame carrying a mode code.
    Mode(ModeCode),
    /// Measured zone temperature.
    Temperature(WireTemperature),
    /// Temperature measured by an external probe.
    ProbeTemperature(WireTemperature),
    /// Configured setpoint temperature.
    Setpoint(WireTemperature),
    /// Local knob offset, as the raw wire code.
    Offset(String),
    /// Actuator on/off status.
    ActuatorStatus,
    /// Zone target temperature.
    TargetTemperature(WireTemperature),
    /// A dimension this library does not handle.
    Unsupported(Dimension),
}

impl ThermoReport {
    /// Classifies an already-parsed frame into a report.
    ///
    /// A frame with a mode code is a command frame regardless of `dim`;
    /// otherwise `dim` selects the measurement kind and `value` carries its
    /// first raw field. Returns `None` when the frame has neither tag.
    #[must_use]
    pub fn classify(
        what: Option<ModeCode>,
        dim: Option<Dimension>,
        value: Option<&str>,
    ) -> Option<Self> {
        if let Some(code) = what {
            return Some(Self::Mode(code));
        }
        let raw = value.unwrap_or_default();
        dim.map(|dim| match dim {
            Dimension::Temperature => Self::Temperature(WireTemperature::new(raw)),
            Dimension::ProbeTemperature => Self::ProbeTemperature(WireTemperature::new(raw)),
            Dimension::Setpoint => Self::Setpoint(WireTemperature::new(raw)),
            Dimension::Offset => Self::Offset(raw.to_string()),
            Dimension::ActuatorStatus => Self::ActuatorStatus,
            Dimension::TargetTemperature => Self::TargetTemperature(WireTemperature::new(raw)),
            Dimension::FanCoilSpeed | Dimension::ValveStatus => Self::Unsupported(dim),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_frame_wins_over_dim() {
        let report = ThermoReport::classify(
            Some(ModeCode::ManualGeneric),
            Some(Dimension::Temperature),
            Some("0215"),
        );
        assert_eq!(report, Some(ThermoReport::Mode(ModeCode::ManualGeneric)));
    }

    #[test]
    fn measurement_frames_classify_by_dim() {
        let report = ThermoReport::classify(None, Some(Dimension::Setpoint), Some("0210"));
        assert_eq!(
            report,
            Some(ThermoReport::Setpoint(WireTemperature::new("0210")))
        );

        let report = ThermoReport::classify(None, Some(Dimension::Offset), Some("03"));
        assert_eq!(report, Some(ThermoReport::Offset("03".to_string())));

        let report = ThermoReport::classify(None, Some(Dimension::ActuatorStatus), Some("1"));
        assert_eq!(report, Some(ThermoReport::ActuatorStatus));
    }

    #[test]
    fn unhandled_dims_classify_as_unsupported() {
        let report = ThermoReport::classify(None, Some(Dimension::FanCoilSpeed), Some("2"));
        assert_eq!(
            report,
            Some(ThermoReport::Unsupported(Dimension::FanCoilSpeed))
        );
    }

    #[test]
    fn missing_value_keeps_the_frame() {
        // Malformed payloads are reported when consumed, not at dispatch.
        let report = ThermoReport::classify(None, Some(Dimension::Temperature), None);
        assert_eq!(
            report,
            Some(ThermoReport::Temperature(WireTemperature::new("")))
        );
    }

    #[test]
    fn frame_without_tags_is_unclassifiable() {
        assert_eq!(ThermoReport::classify(None, None, Some("0215")), None);
    }
}
