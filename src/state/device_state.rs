// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device state tracking.

use crate::types::{LocalOffset, OperatingMode, ThermalFunction};

/// Cached state of one thermoregulation device.
///
/// The mode and function setters are equality-gated: they return whether
/// the value actually changed, and the handler publishes to the platform
/// only when it did. This keeps the change-detection rule in one place
/// instead of scattered across update handlers. The local offset is the
/// deliberate exception: devices re-assert the knob position and every
/// valid report is re-published, so its setter is unconditional.
///
/// # Examples
///
/// ```
/// use thermor_lib::state::DeviceState;
/// use thermor_lib::types::OperatingMode;
///
/// let mut state = DeviceState::new();
/// assert!(state.set_active_mode(OperatingMode::Auto));
/// assert!(!state.set_active_mode(OperatingMode::Auto));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceState {
    /// Mode configured on the device.
    set_mode: OperatingMode,
    /// Mode the device is actually running.
    active_mode: OperatingMode,
    /// Plant the device currently drives.
    thermal_function: ThermalFunction,
    /// Last reported knob position.
    local_offset: LocalOffset,
}

impl DeviceState {
    /// Creates a state with every field unknown and the knob at rest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Getters ==========

    /// Mode configured on the device.
    #[must_use]
    pub const fn set_mode(&self) -> OperatingMode {
        self.set_mode
    }

    /// Mode the device is actually running.
    #[must_use]
    pub const fn active_mode(&self) -> OperatingMode {
        self.active_mode
    }

    /// Plant the device currently drives.
    #[must_use]
    pub const fn thermal_function(&self) -> ThermalFunction {
        self.thermal_function
    }

    /// Last reported knob position.
    #[must_use]
    pub const fn local_offset(&self) -> LocalOffset {
        self.local_offset
    }

    // ========== Equality-gated setters ==========

    /// Updates the configured mode.
    ///
    /// Returns `true` if the value changed and a publish is warranted.
    pub fn set_set_mode(&mut self, mode: OperatingMode) -> bool {
        let changed = self.set_mode != mode;
        self.set_mode = mode;
        changed
    }

    /// Updates the running mode.
    ///
    /// Returns `true` if the value changed and a publish is warranted.
    pub fn set_active_mode(&mut self, mode: OperatingMode) -> bool {
        let changed = self.active_mode != mode;
        self.active_mode = mode;
        changed
    }

    /// Updates the thermal function.
    ///
    /// Returns `true` if the value changed and a publish is warranted.
    pub fn set_thermal_function(&mut self, function: ThermalFunction) -> bool {
        let changed = self.thermal_function != function;
        self.thermal_function = function;
        changed
    }

    /// Updates the knob position. Not gated: every valid offset report is
    /// re-published.
    pub fn set_local_offset(&mut self, offset: LocalOffset) {
        self.local_offset = offset;
    }

    /// Resets every field to unknown.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
