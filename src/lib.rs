// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `ThermoR` Lib - A Rust library for bus thermoregulation devices.
//!
//! This library translates between a home-automation platform's channel
//! model (named data points carrying typed commands and state) and the wire
//! protocol of bus-based climate controllers: operating modes, setpoint and
//! measured temperatures, local knob offsets and the thermal function a
//! device drives.
//!
//! # Supported Features
//!
//! - **Mode translation**: the function-qualified wire codes decoded into
//!   an operating mode and a thermal function, and encoded back using the
//!   cached function to pick the right variant
//! - **Command routing**: setpoint and mode commands turned into validated
//!   write requests for a frame gateway
//! - **Event routing**: classified inbound reports published to platform
//!   channels, with change detection so repeated identical reports do not
//!   re-publish
//! - **Central unit support**: zone `#0` publishes on the all-devices
//!   channel pair
//!
//! The transport itself is out of scope: implement [`FrameGateway`] on your
//! bridge layer and [`StateSink`] on your platform surface, and feed the
//! handler already-classified reports.
//!
//! # Quick Start
//!
//! ```no_run
//! use thermor_lib::channel::{ChannelCommand, ChannelId, ChannelValue, StateSink};
//! use thermor_lib::error::GatewayError;
//! use thermor_lib::protocol::{ModeCode, ThermoReport, ThermoRequest, ZoneAddress};
//! use thermor_lib::{FrameGateway, ThermoHandler};
//!
//! struct Bridge;
//!
//! impl FrameGateway for Bridge {
//!     async fn send(&self, request: &ThermoRequest) -> Result<(), GatewayError> {
//!         println!("-> {}", request.frame());
//!         Ok(())
//!     }
//! }
//!
//! struct Platform;
//!
//! impl StateSink for Platform {
//!     fn publish(&self, channel: ChannelId, value: ChannelValue) {
//!         println!("{channel} = {value}");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let zone = ZoneAddress::new(2).unwrap();
//!     let handler = ThermoHandler::new(zone, Bridge, Platform);
//!
//!     // Outbound: a platform command becomes a write request
//!     handler
//!         .handle_command(ChannelId::Setpoint, ChannelCommand::celsius(21.5))
//!         .await;
//!
//!     // Inbound: a classified report becomes channel state
//!     handler.handle_report(&ThermoReport::Mode(ModeCode::ProgramHeating));
//! }
//! ```

pub mod channel;
pub mod error;
mod gateway;
mod handler;
pub mod protocol;
pub mod state;
pub mod types;

pub use channel::{ChannelCommand, ChannelId, ChannelValue, StateSink};
pub use error::{Error, FrameError, GatewayError, RequestError, Result};
pub use gateway::FrameGateway;
pub use handler::ThermoHandler;
pub use protocol::{
    Dimension, ModeCode, ThermoReport, ThermoRequest, WireTemperature, ZoneAddress,
};
pub use state::DeviceState;
pub use types::{
    LocalOffset, OperatingMode, ParseOperatingModeError, TemperatureUnit, ThermalFunction,
};
