// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Volume and mute types.
//!
//! This module provides a type-safe representation of the device volume,
//! ensuring values are always within the valid range of 0-100.

use std::fmt;

use crate::error::ValueError;

/// Volume level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use wiim_lib::types::Volume;
///
/// let vol = Volume::new(40).unwrap();
/// assert_eq!(vol.value(), 40);
///
/// assert_eq!(Volume::MIN.value(), 0);
/// assert_eq!(Volume::MAX.value(), 100);
///
/// // Invalid values return error
/// assert!(Volume::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    /// Minimum volume (silent).
    pub const MIN: Self = Self(0);

    /// Maximum volume.
    pub const MAX: Self = Self(100);

    /// Creates a new volume value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: i32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a volume from any integer, clamping to `[0, 100]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wiim_lib::types::Volume;
    ///
    /// assert_eq!(Volume::clamped(-15).value(), 0);
    /// assert_eq!(Volume::clamped(42).value(), 42);
    /// assert_eq!(Volume::clamped(250).value(), 100);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamped(value: i32) -> Self {
        // Safe: clamped into 0..=100 before the cast
        Self(value.clamp(0, 100) as u8)
    }

    /// Returns this volume shifted by a signed offset, clamped to `[0, 100]`.
    #[must_use]
    pub fn offset(self, delta: i32) -> Self {
        Self::clamped(i32::from(self.0).saturating_add(delta))
    }

    /// Returns the volume percentage.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Volume {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Mute flag as understood by `setPlayerCmd:mute:<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MuteState {
    /// Audio output is muted.
    Muted,
    /// Audio output is not muted.
    Unmuted,
}

impl MuteState {
    /// Returns the wire value sent to the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Muted => "1",
            Self::Unmuted => "0",
        }
    }
}

impl From<bool> for MuteState {
    fn from(muted: bool) -> Self {
        if muted { Self::Muted } else { Self::Unmuted }
    }
}

impl fmt::Display for MuteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_valid_values() {
        for v in 0..=100 {
            assert_eq!(Volume::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn volume_invalid_value() {
        assert_eq!(
            Volume::new(101),
            Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: 101
            })
        );
    }

    #[test]
    fn volume_clamped() {
        assert_eq!(Volume::clamped(i32::MIN).value(), 0);
        assert_eq!(Volume::clamped(0).value(), 0);
        assert_eq!(Volume::clamped(100).value(), 100);
        assert_eq!(Volume::clamped(i32::MAX).value(), 100);
    }

    #[test]
    fn volume_offset() {
        let vol = Volume::new(50).unwrap();
        assert_eq!(vol.offset(-10).value(), 40);
        assert_eq!(vol.offset(75).value(), 100);
        assert_eq!(Volume::new(5).unwrap().offset(-20).value(), 0);
        assert_eq!(Volume::MAX.offset(i32::MAX).value(), 100);
    }

    #[test]
    fn volume_display() {
        assert_eq!(Volume::new(75).unwrap().to_string(), "75");
    }

    #[test]
    fn mute_state_wire_values() {
        assert_eq!(MuteState::Muted.as_str(), "1");
        assert_eq!(MuteState::Unmuted.as_str(), "0");
        assert_eq!(MuteState::from(true), MuteState::Muted);
    }
}
