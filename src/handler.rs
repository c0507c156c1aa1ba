// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device handler for thermoregulation zones.
//!
//! The handler is the meeting point of the two data flows: platform
//! commands routed out to the bus, and bus reports routed back to platform
//! channels. Both flows share one cached [`DeviceState`] owned by the
//! handler instance.
//!
//! Neither entry point ever returns an error or panics. Invalid commands,
//! undeliverable frames and undecodable payloads all terminate in a log
//! statement; temperature channels additionally publish an explicit
//! undefined marker so consumers never see stale data as current.

use parking_lot::RwLock;

use crate::channel::{ChannelCommand, ChannelId, ChannelValue, StateSink};
use crate::gateway::FrameGateway;
use crate::protocol::{ModeCode, ThermoReport, ThermoRequest, WireTemperature, ZoneAddress};
use crate::state::DeviceState;
use crate::types::{LocalOffset, OperatingMode, ThermalFunction};

/// Handler for one thermoregulation device.
///
/// A handler is constructed per device with the zone address, a
/// [`FrameGateway`] for outbound requests and a [`StateSink`] for state
/// updates. The central unit (zone `#0`) publishes setpoint state on the
/// all-devices channels; ordinary zones use the per-device ones.
///
/// The host platform is expected to serialize calls per instance, but the
/// cached state is lock-guarded so a platform that dispatches commands and
/// reports from different threads stays correct.
///
/// # Examples
///
/// ```no_run
/// use thermor_lib::channel::{ChannelCommand, ChannelId, ChannelValue, StateSink};
/// use thermor_lib::error::GatewayError;
/// use thermor_lib::protocol::{ThermoRequest, ZoneAddress};
/// use thermor_lib::{FrameGateway, ThermoHandler};
///
/// struct Bridge;
///
/// impl FrameGateway for Bridge {
///     async fn send(&self, request: &ThermoRequest) -> Result<(), GatewayError> {
///         println!("-> {}", request.frame());
///         Ok(())
///     }
/// }
///
/// struct Platform;
///
/// impl StateSink for Platform {
///     fn publish(&self, channel: ChannelId, value: ChannelValue) {
///         println!("{channel} = {value}");
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let zone = ZoneAddress::new(2).unwrap();
///     let handler = ThermoHandler::new(zone, Bridge, Platform);
///     handler
///         .handle_command(ChannelId::Setpoint, ChannelCommand::celsius(21.5))
///         .await;
/// }
/// ```
#[derive(Debug)]
pub struct ThermoHandler<G, S> {
    /// Bus address of the device.
    address: ZoneAddress,
    /// Fixed at construction; selects the per-device or all-devices
    /// channel pair for setpoint and set-mode state.
    central_unit: bool,
    /// Cached device state, owned by this instance.
    state: RwLock<DeviceState>,
    gateway: G,
    sink: S,
}

impl<G, S> ThermoHandler<G, S> {
    /// Creates a handler for the device at `address`.
    ///
    /// The central-unit role is derived from the address: zone `#0` speaks
    /// for the whole system.
    pub fn new(address: ZoneAddress, gateway: G, sink: S) -> Self {
        Self {
            address,
            central_unit: address.is_central(),
            state: RwLock::new(DeviceState::new()),
            gateway,
            sink,
        }
    }

    /// Returns the bus address of the device.
    #[must_use]
    pub const fn address(&self) -> ZoneAddress {
        self.address
    }

    /// Returns `true` if this handler represents the central unit.
    #[must_use]
    pub const fn is_central_unit(&self) -> bool {
        self.central_unit
    }

    /// Returns a snapshot of the cached device state.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        self.state.read().clone()
    }
}

impl<G: FrameGateway, S: StateSink> ThermoHandler<G, S> {
    // ========== Command routing ==========

    /// Routes a platform command to the matching outbound request.
    ///
    /// Setpoint-class channels accept quantity or decimal commands;
    /// mode-class channels accept mode-name text. Commands addressed to any
    /// other channel are logged and ignored.
    pub async fn handle_command(&self, channel: ChannelId, command: ChannelCommand) {
        tracing::debug!(zone = %self.address, %channel, "handling channel command");
        match channel {
            ChannelId::Setpoint | ChannelId::AllSetpoint => {
                self.handle_setpoint_command(&command).await;
            }
            ChannelId::SetMode | ChannelId::AllSetMode => {
                self.handle_mode_command(&command).await;
            }
            _ => {
                tracing::warn!(zone = %self.address, %channel, "unsupported command channel");
            }
        }
    }

    /// Sends a status request for this zone.
    ///
    /// Typically called when the platform asks for a state refresh; the
    /// answers come back as ordinary reports.
    pub async fn request_refresh(&self) {
        let request = ThermoRequest::status(self.address);
        if let Err(e) = self.gateway.send(&request).await {
            tracing::error!(zone = %self.address, error = %e, "status request failed");
        }
    }

    async fn handle_setpoint_command(&self, command: &ChannelCommand) {
        let celsius = match command {
            ChannelCommand::Quantity { value, unit } => unit.to_celsius(*value),
            ChannelCommand::Decimal(value) => *value,
            ChannelCommand::Text(text) => {
                tracing::warn!(zone = %self.address, command = %text, "setpoint command is not numeric");
                return;
            }
        };
        match ThermoRequest::write_setpoint(self.address, celsius) {
            Ok(request) => {
                if let Err(e) = self.gateway.send(&request).await {
                    tracing::warn!(zone = %self.address, error = %e, "setpoint write not sent");
                }
            }
            Err(e) => {
                tracing::warn!(zone = %self.address, error = %e, "setpoint command rejected");
            }
        }
    }

    async fn handle_mode_command(&self, command: &ChannelCommand) {
        let ChannelCommand::Text(text) = command else {
            tracing::warn!(zone = %self.address, "mode command is not a string");
            return;
        };
        let mode = match text.parse::<OperatingMode>() {
            Ok(mode) => mode,
            Err(e) => {
                tracing::warn!(zone = %self.address, error = %e, "mode command rejected");
                return;
            }
        };
        let function = self.state.read().thermal_function();
        let code = ModeCode::for_mode(mode, function);
        tracing::debug!(zone = %self.address, %mode, %code, "writing mode");
        match ThermoRequest::write_mode(self.address, code) {
            Ok(request) => {
                if let Err(e) = self.gateway.send(&request).await {
                    tracing::warn!(zone = %self.address, error = %e, "mode write not sent");
                }
            }
            Err(e) => {
                tracing::warn!(zone = %self.address, error = %e, "mode command rejected");
            }
        }
    }

    // ========== Event routing ==========

    /// Routes an inbound report to the matching update handler.
    ///
    /// The match is exhaustive: a report kind added to the protocol layer
    /// must be given a branch here, even if that branch is an explicit
    /// ignore.
    pub fn handle_report(&self, report: &ThermoReport) {
        match report {
            ThermoReport::Mode(code) => self.update_mode(*code),
            ThermoReport::Temperature(raw) | ThermoReport::ProbeTemperature(raw) => {
                self.update_temperature(raw);
            }
            ThermoReport::Setpoint(raw) => self.update_setpoint(raw),
            ThermoReport::Offset(code) => self.update_local_offset(code),
            // Actuator status reporting is not implemented; swallowing the
            // report keeps it from reaching the unsupported branch below.
            ThermoReport::ActuatorStatus => {
                tracing::debug!(zone = %self.address, "ignoring actuator status");
            }
            ThermoReport::TargetTemperature(raw) => self.update_target_temperature(raw),
            ThermoReport::Unsupported(dim) => {
                tracing::debug!(zone = %self.address, dimension = %dim, "ignoring unsupported dimension");
            }
        }
    }

    /// Applies a mode report: active mode, thermal function, then the
    /// derived heating/cooling summary, in that order.
    ///
    /// Mode reports always update the *active* mode. Set-mode reports from
    /// a central unit are not distinguished yet; [`DeviceState::set_set_mode`]
    /// is in place for when they are.
    fn update_mode(&self, code: ModeCode) {
        let mode = code.operating_mode();
        if mode.is_commandable() {
            if self.state.write().set_active_mode(mode) {
                self.sink
                    .publish(ChannelId::ActiveMode, ChannelValue::Label(mode.as_str()));
            }
        } else {
            tracing::debug!(zone = %self.address, %code, "mode code carries no regime");
        }
        self.update_thermal_function(code);
        self.update_heating_cooling();
    }

    fn update_thermal_function(&self, code: ModeCode) {
        let function = code.thermal_function();
        if self.state.write().set_thermal_function(function) {
            self.sink.publish(
                ChannelId::ThermalFunction,
                ChannelValue::Label(function.as_str()),
            );
        }
    }

    /// Recomputes the heating/cooling summary and re-publishes it on every
    /// mode report, changed or not.
    fn update_heating_cooling(&self) {
        let (active, function) = {
            let state = self.state.read();
            (state.active_mode(), state.thermal_function())
        };
        let value = if active == OperatingMode::Off {
            ChannelValue::Label("off")
        } else {
            match function {
                ThermalFunction::Heat => ChannelValue::Label("heat"),
                ThermalFunction::Cool => ChannelValue::Label("cool"),
                ThermalFunction::Generic => ChannelValue::Label("heatcool"),
                ThermalFunction::Unknown => ChannelValue::Undefined,
            }
        };
        self.sink.publish(ChannelId::HeatingCooling, value);
    }

    fn update_temperature(&self, raw: &WireTemperature) {
        self.publish_temperature(ChannelId::Temperature, raw);
    }

    fn update_setpoint(&self, raw: &WireTemperature) {
        let channel = if self.central_unit {
            ChannelId::AllSetpoint
        } else {
            ChannelId::Setpoint
        };
        self.publish_temperature(channel, raw);
    }

    fn update_target_temperature(&self, raw: &WireTemperature) {
        self.publish_temperature(ChannelId::TargetTemperature, raw);
    }

    /// Publishes a decoded temperature, or the explicit undefined marker
    /// when the field does not decode.
    fn publish_temperature(&self, channel: ChannelId, raw: &WireTemperature) {
        match raw.to_celsius() {
            Ok(celsius) => {
                self.sink.publish(channel, ChannelValue::Decimal(celsius));
            }
            Err(e) => {
                tracing::warn!(zone = %self.address, %channel, error = %e, "temperature field not decoded");
                self.sink.publish(channel, ChannelValue::Undefined);
            }
        }
    }

    /// Caches and re-publishes the knob position. Unrecognized codes leave
    /// the cached value untouched and publish nothing.
    fn update_local_offset(&self, code: &str) {
        match LocalOffset::from_code(code) {
            Ok(offset) => {
                self.state.write().set_local_offset(offset);
                tracing::debug!(zone = %self.address, %offset, "local offset reported");
                self.sink
                    .publish(ChannelId::LocalMode, ChannelValue::Label(offset.label()));
            }
            Err(e) => {
                tracing::warn!(zone = %self.address, error = %e, "local offset not decoded");
            }
        }
    }
}
