// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The frame gateway seam.

use crate::error::GatewayError;
use crate::protocol::ThermoRequest;

/// Transport that delivers outbound requests to the bus.
///
/// Implemented by the bridge layer of the host integration. The handler
/// treats sends as fire-and-forget: a failed send is logged and dropped,
/// never retried. Transport-level timeouts belong to the gateway, not to
/// callers.
#[allow(async_fn_in_trait)]
pub trait FrameGateway {
    /// Sends one request to the bus.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the frame could not be delivered.
    async fn send(&self, request: &ThermoRequest) -> Result<(), GatewayError>;
}
