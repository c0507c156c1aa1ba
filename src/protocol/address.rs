// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Zone addresses on the thermoregulation bus.

use std::fmt;

use crate::error::RequestError;

/// Bus address of a thermoregulation zone.
///
/// Zones are numbered 1-99; zone 0 addresses the central unit, which speaks
/// for the whole system. The central unit renders as `#0` in frames.
///
/// # Examples
///
/// ```
/// use thermor_lib::protocol::ZoneAddress;
///
/// let zone = ZoneAddress::new(2).unwrap();
/// assert_eq!(zone.to_string(), "2");
/// assert!(!zone.is_central());
///
/// let central = ZoneAddress::central();
/// assert_eq!(central.to_string(), "#0");
/// assert!(central.is_central());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ZoneAddress(u8);

impl ZoneAddress {
    /// Highest zone number the bus supports.
    pub const MAX: u8 = 99;

    /// Creates a zone address.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::AddressOutOfRange`] if `zone` exceeds
    /// [`Self::MAX`].
    pub const fn new(zone: u8) -> Result<Self, RequestError> {
        if zone > Self::MAX {
            return Err(RequestError::AddressOutOfRange(zone));
        }
        Ok(Self(zone))
    }

    /// Returns the address of the central unit.
    #[must_use]
    pub const fn central() -> Self {
        Self(0)
    }

    /// Returns the zone number.
    #[must_use]
    pub const fn zone(&self) -> u8 {
        self.0
    }

    /// Returns `true` if this address targets the central unit.
    #[must_use]
    pub const fn is_central(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ZoneAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_central() {
            write!(f, "#0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_in_range() {
        for zone in 0..=99 {
            let addr = ZoneAddress::new(zone).unwrap();
            assert_eq!(addr.zone(), zone);
        }
    }

    #[test]
    fn zone_out_of_range() {
        assert_eq!(
            ZoneAddress::new(100).unwrap_err(),
            RequestError::AddressOutOfRange(100)
        );
    }

    #[test]
    fn central_unit_address() {
        let central = ZoneAddress::central();
        assert!(central.is_central());
        assert_eq!(central.zone(), 0);
        assert_eq!(central.to_string(), "#0");
    }

    #[test]
    fn ordinary_zone_display() {
        assert_eq!(ZoneAddress::new(7).unwrap().to_string(), "7");
        assert_eq!(ZoneAddress::new(42).unwrap().to_string(), "42");
    }
}
