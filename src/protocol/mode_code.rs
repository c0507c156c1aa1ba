// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire-level mode codes and their translation to platform values.
//!
//! The bus qualifies every thermoregulation mode with the function it
//! applies to, so "manual" alone does not exist on the wire: only "manual
//! heating" (110), "manual conditioning" (210) and "manual generic" (310)
//! do. This module owns the full tag space and the three pure translations:
//!
//! - code → [`OperatingMode`] ([`ModeCode::operating_mode`])
//! - code → [`ThermalFunction`] ([`ModeCode::thermal_function`])
//! - (mode, function) → code ([`ModeCode::for_mode`])
//!
//! Holiday codes and the three bare function markers only ever arrive
//! inbound; they carry no operating mode and are never written.

use std::fmt;

use crate::types::{OperatingMode, ThermalFunction};

/// A mode code from the thermoregulation tag space.
///
/// The numeric value is the raw wire tag: the hundreds digit selects the
/// function family (1xx heating, 2xx conditioning, 3xx generic) and the
/// remainder selects the regime.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::ModeCode;
/// use thermor_lib::types::{OperatingMode, ThermalFunction};
///
/// let code = ModeCode::from_value(211).unwrap();
/// assert_eq!(code, ModeCode::ProgramConditioning);
/// assert_eq!(code.operating_mode(), OperatingMode::Auto);
/// assert_eq!(code.thermal_function(), ThermalFunction::Cool);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[repr(u16)]
pub enum ModeCode {
    /// Bare conditioning marker.
    Conditioning = 0,
    /// Bare heating marker.
    Heating = 1,
    /// Bare generic marker.
    Generic = 3,
    /// Anti-freeze protection, heating plant.
    ProtectionHeating = 102,
    /// Regulation off, heating plant.
    OffHeating = 103,
    /// Manual setpoint, heating plant.
    ManualHeating = 110,
    /// Programmed schedule, heating plant.
    ProgramHeating = 111,
    /// Holiday program, heating plant.
    HolidayHeating = 115,
    /// Anti-freeze protection, conditioning plant.
    ProtectionConditioning = 202,
    /// Regulation off, conditioning plant.
    OffConditioning = 203,
    /// Manual setpoint, conditioning plant.
    ManualConditioning = 210,
    /// Programmed schedule, conditioning plant.
    ProgramConditioning = 211,
    /// Holiday program, conditioning plant.
    HolidayConditioning = 215,
    /// Anti-freeze protection, generic plant.
    ProtectionGeneric = 302,
    /// Regulation off, generic plant.
    OffGeneric = 303,
    /// Manual setpoint, generic plant.
    ManualGeneric = 310,
    /// Programmed schedule, generic plant.
    ProgramGeneric = 311,
    /// Holiday program, generic plant.
    HolidayGeneric = 315,
}

impl ModeCode {
    /// Every code the protocol defines, for iteration.
    pub const ALL: [Self; 18] = [
        Self::Conditioning,
        Self::Heating,
        Self::Generic,
        Self::ProtectionHeating,
        Self::OffHeating,
        Self::ManualHeating,
        Self::ProgramHeating,
        Self::HolidayHeating,
        Self::ProtectionConditioning,
        Self::OffConditioning,
        Self::ManualConditioning,
        Self::ProgramConditioning,
        Self::HolidayConditioning,
        Self::ProtectionGeneric,
        Self::OffGeneric,
        Self::ManualGeneric,
        Self::ProgramGeneric,
        Self::HolidayGeneric,
    ];

    /// Looks up a raw wire tag.
    ///
    /// Returns `None` for values outside the defined tag space; the caller
    /// decides whether to warn and drop the frame.
    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Conditioning),
            1 => Some(Self::Heating),
            3 => Some(Self::Generic),
            102 => Some(Self::ProtectionHeating),
            103 => Some(Self::OffHeating),
            110 => Some(Self::ManualHeating),
            111 => Some(Self::ProgramHeating),
            115 => Some(Self::HolidayHeating),
            202 => Some(Self::ProtectionConditioning),
            203 => Some(Self::OffConditioning),
            210 => Some(Self::ManualConditioning),
            211 => Some(Self::ProgramConditioning),
            215 => Some(Self::HolidayConditioning),
            302 => Some(Self::ProtectionGeneric),
            303 => Some(Self::OffGeneric),
            310 => Some(Self::ManualGeneric),
            311 => Some(Self::ProgramGeneric),
            315 => Some(Self::HolidayGeneric),
            _ => None,
        }
    }

    /// Returns the raw wire tag for this code.
    #[must_use]
    pub const fn value(&self) -> u16 {
        *self as u16
    }

    /// Extracts the operating regime carried by this code.
    ///
    /// Bare function markers and holiday codes carry none and map to
    /// [`OperatingMode::Unknown`]; callers must not surface those as a mode
    /// change.
    #[must_use]
    pub const fn operating_mode(&self) -> OperatingMode {
        match self {
            Self::ProgramHeating | Self::ProgramConditioning | Self::ProgramGeneric => {
                OperatingMode::Auto
            }
            Self::ManualHeating | Self::ManualConditioning | Self::ManualGeneric => {
                OperatingMode::Manual
            }
            Self::ProtectionHeating | Self::ProtectionConditioning | Self::ProtectionGeneric => {
                OperatingMode::Protection
            }
            Self::OffHeating | Self::OffConditioning | Self::OffGeneric => OperatingMode::Off,
            Self::Conditioning
            | Self::Heating
            | Self::Generic
            | Self::HolidayHeating
            | Self::HolidayConditioning
            | Self::HolidayGeneric => OperatingMode::Unknown,
        }
    }

    /// Extracts the thermal function carried by this code.
    ///
    /// The match is exhaustive over the tag space: a new code added here
    /// must be classified explicitly and can never fall into a bucket by
    /// accident.
    #[must_use]
    pub const fn thermal_function(&self) -> ThermalFunction {
        match self {
            Self::Conditioning
            | Self::ProgramConditioning
            | Self::ManualConditioning
            | Self::ProtectionConditioning
            | Self::OffConditioning
            | Self::HolidayConditioning => ThermalFunction::Cool,
            Self::Heating
            | Self::ProgramHeating
            | Self::ManualHeating
            | Self::ProtectionHeating
            | Self::OffHeating
            | Self::HolidayHeating => ThermalFunction::Heat,
            Self::Generic
            | Self::ProgramGeneric
            | Self::ManualGeneric
            | Self::ProtectionGeneric
            | Self::OffGeneric
            | Self::HolidayGeneric => ThermalFunction::Generic,
        }
    }

    /// Selects the function-qualified code for an outbound mode write.
    ///
    /// An unknown function falls back to the heating family, matching the
    /// behavior bus installations have come to rely on. An unknown mode
    /// encodes as the off variant; command parsing never produces it.
    #[must_use]
    pub const fn for_mode(mode: OperatingMode, function: ThermalFunction) -> Self {
        match mode {
            OperatingMode::Auto => match function {
                ThermalFunction::Generic => Self::ProgramGeneric,
                ThermalFunction::Cool => Self::ProgramConditioning,
                ThermalFunction::Heat | ThermalFunction::Unknown => Self::ProgramHeating,
            },
            OperatingMode::Manual => match function {
                ThermalFunction::Generic => Self::ManualGeneric,
                ThermalFunction::Cool => Self::ManualConditioning,
                ThermalFunction::Heat | ThermalFunction::Unknown => Self::ManualHeating,
            },
            OperatingMode::Protection => match function {
                ThermalFunction::Generic => Self::ProtectionGeneric,
                ThermalFunction::Cool => Self::ProtectionConditioning,
                ThermalFunction::Heat | ThermalFunction::Unknown => Self::ProtectionHeating,
            },
            OperatingMode::Off | OperatingMode::Unknown => match function {
                ThermalFunction::Generic => Self::OffGeneric,
                ThermalFunction::Cool => Self::OffConditioning,
                ThermalFunction::Heat | ThermalFunction::Unknown => Self::OffHeating,
            },
        }
    }

    /// Returns `true` for codes a device accepts in a mode write.
    ///
    /// Bare function markers and holiday codes are read-only.
    #[must_use]
    pub const fn is_writable(&self) -> bool {
        !matches!(
            self,
            Self::Conditioning
                | Self::Heating
                | Self::Generic
                | Self::HolidayHeating
                | Self::HolidayConditioning
                | Self::HolidayGeneric
        )
    }
}

impl fmt::Display for ModeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_roundtrip() {
        for code in ModeCode::ALL {
            assert_eq!(ModeCode::from_value(code.value()), Some(code));
        }
    }

    #[test]
    fn from_value_unrecognized() {
        assert_eq!(ModeCode::from_value(2), None);
        assert_eq!(ModeCode::from_value(104), None);
        assert_eq!(ModeCode::from_value(999), None);
    }

    #[test]
    fn program_family_decodes_to_auto() {
        for code in [
            ModeCode::ProgramHeating,
            ModeCode::ProgramConditioning,
            ModeCode::ProgramGeneric,
        ] {
            assert_eq!(code.operating_mode(), OperatingMode::Auto);
        }
    }

    #[test]
    fn manual_family_decodes_to_manual() {
        for code in [
            ModeCode::ManualHeating,
            ModeCode::ManualConditioning,
            ModeCode::ManualGeneric,
        ] {
            assert_eq!(code.operating_mode(), OperatingMode::Manual);
        }
    }

    #[test]
    fn protection_family_decodes_to_protection() {
        for code in [
            ModeCode::ProtectionHeating,
            ModeCode::ProtectionConditioning,
            ModeCode::ProtectionGeneric,
        ] {
            assert_eq!(code.operating_mode(), OperatingMode::Protection);
        }
    }

    #[test]
    fn off_family_decodes_to_off() {
        for code in [
            ModeCode::OffHeating,
            ModeCode::OffConditioning,
            ModeCode::OffGeneric,
        ] {
            assert_eq!(code.operating_mode(), OperatingMode::Off);
        }
    }

    #[test]
    fn markers_and_holiday_decode_to_unknown() {
        for code in [
            ModeCode::Conditioning,
            ModeCode::Heating,
            ModeCode::Generic,
            ModeCode::HolidayHeating,
            ModeCode::HolidayConditioning,
            ModeCode::HolidayGeneric,
        ] {
            assert_eq!(code.operating_mode(), OperatingMode::Unknown);
        }
    }

    #[test]
    fn every_code_classifies_its_function() {
        for code in ModeCode::ALL {
            let expected = match code.value() {
                0 | 200..=299 => ThermalFunction::Cool,
                1 | 100..=199 => ThermalFunction::Heat,
                _ => ThermalFunction::Generic,
            };
            assert_eq!(code.thermal_function(), expected, "code {code}");
        }
    }

    #[test]
    fn encode_decode_roundtrip() {
        let modes = [
            OperatingMode::Auto,
            OperatingMode::Manual,
            OperatingMode::Protection,
            OperatingMode::Off,
        ];
        let functions = [
            ThermalFunction::Heat,
            ThermalFunction::Cool,
            ThermalFunction::Generic,
        ];
        for mode in modes {
            for function in functions {
                let code = ModeCode::for_mode(mode, function);
                assert_eq!(code.operating_mode(), mode);
                assert_eq!(code.thermal_function(), function);
            }
        }
    }

    #[test]
    fn unknown_function_encodes_as_heating() {
        assert_eq!(
            ModeCode::for_mode(OperatingMode::Auto, ThermalFunction::Unknown),
            ModeCode::ProgramHeating
        );
        assert_eq!(
            ModeCode::for_mode(OperatingMode::Manual, ThermalFunction::Unknown),
            ModeCode::ManualHeating
        );
    }

    #[test]
    fn unknown_mode_encodes_as_off() {
        assert_eq!(
            ModeCode::for_mode(OperatingMode::Unknown, ThermalFunction::Cool),
            ModeCode::OffConditioning
        );
    }

    #[test]
    fn writable_codes() {
        assert!(ModeCode::ManualHeating.is_writable());
        assert!(ModeCode::OffGeneric.is_writable());
        assert!(!ModeCode::Heating.is_writable());
        assert!(!ModeCode::HolidayConditioning.is_writable());
    }

    #[test]
    fn display_shows_wire_tag() {
        assert_eq!(ModeCode::ManualConditioning.to_string(), "210");
        assert_eq!(ModeCode::Conditioning.to_string(), "0");
    }
}
