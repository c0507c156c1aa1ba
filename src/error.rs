// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `ThermoR` library.
//!
//! This module provides the error hierarchy for failures across the library:
//! gateway communication, outbound request construction, and inbound frame
//! field decoding.
//!
//! None of these errors ever escape the handler's public entry points. The
//! handler logs and drops every failure; the types exist so that the gateway
//! seam and the request builders have precise contracts of their own.

use thiserror::Error;

use crate::protocol::ModeCode;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred while sending through the frame gateway.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Error occurred while constructing an outbound request.
    #[error("request error: {0}")]
    Request(#[from] RequestError),

    /// Error occurred while decoding a field of an inbound frame.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),
}

/// Errors reported by the frame gateway when a send fails.
///
/// These represent transport or bridge problems. The handler treats every
/// variant the same way: log a warning and drop the command, no retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Connection to the bus gateway failed or was lost.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The gateway did not acknowledge the frame in time.
    #[error("send timed out after {0} ms")]
    Timeout(u64),

    /// The gateway is not connected to the bus.
    #[error("gateway is not connected")]
    NotConnected,
}

/// Errors raised while constructing an outbound write request.
///
/// Request builders validate their parameters up front so that only
/// well-formed frames ever reach the gateway.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RequestError {
    /// A setpoint temperature is outside the range the protocol accepts.
    #[error("setpoint {actual} °C is out of range [{min}, {max}]")]
    SetpointOutOfRange {
        /// Minimum accepted setpoint in Celsius.
        min: f64,
        /// Maximum accepted setpoint in Celsius.
        max: f64,
        /// The value that was requested.
        actual: f64,
    },

    /// A temperature cannot be represented in the wire format.
    #[error("temperature {0} °C cannot be encoded")]
    UnrepresentableTemperature(f64),

    /// The mode code is read-only and cannot be written to a device.
    #[error("mode code {0} is not writable")]
    UnwritableMode(ModeCode),

    /// A zone address is outside the valid bus range.
    #[error("zone address {0} is out of range [0, 99]")]
    AddressOutOfRange(u8),
}

/// Errors raised while decoding a field of an inbound frame.
///
/// For temperature-class channels the handler reacts by publishing an
/// explicit undefined marker; for the local offset it leaves the cached
/// value untouched and skips the publish.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A temperature field does not follow the four-digit wire format.
    #[error("invalid temperature field: {0:?}")]
    InvalidTemperature(String),

    /// A local offset code is not one the protocol defines.
    #[error("unrecognized local offset code: {0:?}")]
    UnknownOffset(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
