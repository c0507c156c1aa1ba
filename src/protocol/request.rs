// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outbound write requests.
//!
//! Requests are validated at construction so that a gateway only ever sees
//! well-formed frames. Each request can render the textual frame the bus
//! expects; gateways are free to use the rendering or the structured fields.

use std::fmt;

use crate::error::RequestError;

use super::{ModeCode, WHO_THERMOREGULATION, WireTemperature, ZoneAddress};

/// Lowest setpoint a device accepts, in Celsius.
pub const SETPOINT_MIN: f64 = 5.0;

/// Highest setpoint a device accepts, in Celsius.
pub const SETPOINT_MAX: f64 = 40.0;

/// Function qualifier carried by every setpoint write.
///
/// Setpoint writes are always tagged generic; the device applies the value
/// to whichever plant it currently drives.
const GENERIC_QUALIFIER: u8 = 3;

/// An outbound request for the frame gateway.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::{ModeCode, ThermoRequest, ZoneAddress};
///
/// let zone = ZoneAddress::new(2).unwrap();
///
/// let setpoint = ThermoRequest::write_setpoint(zone, 21.5).unwrap();
/// assert_eq!(setpoint.frame(), "*#4*2*#14*0215*3##");
///
/// let mode = ThermoRequest::write_mode(zone, ModeCode::ManualHeating).unwrap();
/// assert_eq!(mode.frame(), "*4*110*2##");
///
/// let status = ThermoRequest::status(zone);
/// assert_eq!(status.frame(), "*#4*2##");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ThermoRequest {
    /// Write a setpoint temperature.
    WriteSetpoint {
        /// Target zone.
        address: ZoneAddress,
        /// Wire-encoded Celsius value.
        temperature: WireTemperature,
    },
    /// Write an operating mode.
    WriteMode {
        /// Target zone.
        address: ZoneAddress,
        /// Function-qualified mode code.
        code: ModeCode,
    },
    /// Request the zone's full status.
    Status {
        /// Target zone.
        address: ZoneAddress,
    },
}

impl ThermoRequest {
    /// Builds a setpoint write.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::SetpointOutOfRange`] when `celsius` falls
    /// outside [`SETPOINT_MIN`]..=[`SETPOINT_MAX`].
    pub fn write_setpoint(address: ZoneAddress, celsius: f64) -> Result<Self, RequestError> {
        if !(SETPOINT_MIN..=SETPOINT_MAX).contains(&celsius) {
            return Err(RequestError::SetpointOutOfRange {
                min: SETPOINT_MIN,
                max: SETPOINT_MAX,
                actual: celsius,
            });
        }
        Ok(Self::WriteSetpoint {
            address,
            temperature: WireTemperature::from_celsius(celsius)?,
        })
    }

    /// Builds a mode write.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::UnwritableMode`] for bare function markers
    /// and holiday codes, which are read-only on the bus.
    pub fn write_mode(address: ZoneAddress, code: ModeCode) -> Result<Self, RequestError> {
        if !code.is_writable() {
            return Err(RequestError::UnwritableMode(code));
        }
        Ok(Self::WriteMode { address, code })
    }

    /// Builds a status request.
    #[must_use]
    pub const fn status(address: ZoneAddress) -> Self {
        Self::Status { address }
    }

    /// Returns the zone this request targets.
    #[must_use]
    pub const fn address(&self) -> ZoneAddress {
        match self {
            Self::WriteSetpoint { address, .. }
            | Self::WriteMode { address, .. }
            | Self::Status { address } => *address,
        }
    }

    /// Renders the textual frame for this request.
    #[must_use]
    pub fn frame(&self) -> String {
        let who = WHO_THERMOREGULATION;
        match self {
            Self::WriteSetpoint {
                address,
                temperature,
            } => {
                format!("*#{who}*{address}*#14*{temperature}*{GENERIC_QUALIFIER}##")
            }
            Self::WriteMode { address, code } => format!("*{who}*{code}*{address}##"),
            Self::Status { address } => format!("*#{who}*{address}##"),
        }
    }
}

impl fmt::Display for ThermoRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(n: u8) -> ZoneAddress {
        ZoneAddress::new(n).unwrap()
    }

    #[test]
    fn setpoint_request_frame() {
        let request = ThermoRequest::write_setpoint(zone(2), 21.5).unwrap();
        assert_eq!(request.frame(), "*#4*2*#14*0215*3##");
    }

    #[test]
    fn setpoint_request_for_central_unit() {
        let request = ThermoRequest::write_setpoint(ZoneAddress::central(), 19.0).unwrap();
        assert_eq!(request.frame(), "*#4*#0*#14*0190*3##");
    }

    #[test]
    fn setpoint_bounds_are_inclusive() {
        assert!(ThermoRequest::write_setpoint(zone(1), SETPOINT_MIN).is_ok());
        assert!(ThermoRequest::write_setpoint(zone(1), SETPOINT_MAX).is_ok());
    }

    #[test]
    fn setpoint_out_of_range() {
        let result = ThermoRequest::write_setpoint(zone(1), 4.9);
        assert_eq!(
            result.unwrap_err(),
            RequestError::SetpointOutOfRange {
                min: SETPOINT_MIN,
                max: SETPOINT_MAX,
                actual: 4.9,
            }
        );
        assert!(ThermoRequest::write_setpoint(zone(1), 40.1).is_err());
        assert!(ThermoRequest::write_setpoint(zone(1), f64::NAN).is_err());
    }

    #[test]
    fn mode_request_frame() {
        let request = ThermoRequest::write_mode(zone(2), ModeCode::ManualHeating).unwrap();
        assert_eq!(request.frame(), "*4*110*2##");
    }

    #[test]
    fn mode_request_rejects_read_only_codes() {
        assert_eq!(
            ThermoRequest::write_mode(zone(1), ModeCode::Heating).unwrap_err(),
            RequestError::UnwritableMode(ModeCode::Heating)
        );
        assert!(ThermoRequest::write_mode(zone(1), ModeCode::HolidayGeneric).is_err());
    }

    #[test]
    fn status_request_frame() {
        assert_eq!(ThermoRequest::status(zone(5)).frame(), "*#4*5##");
        assert_eq!(
            ThermoRequest::status(ZoneAddress::central()).frame(),
            "*#4*#0##"
        );
    }

    #[test]
    fn request_address_accessor() {
        let request = ThermoRequest::write_mode(zone(9), ModeCode::OffGeneric).unwrap();
        assert_eq!(request.address().zone(), 9);
    }
}
