// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loop (repeat/shuffle) mode constants.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// Playback repeat/shuffle behavior.
///
/// The device encodes loop modes as small integers, both in
/// `setPlayerCmd:loopmode:<n>` and in the `loop` field of `getPlayerStatus`.
///
/// # Examples
///
/// ```
/// use wiim_lib::types::LoopMode;
///
/// assert_eq!(LoopMode::Sequence.as_str(), "4");
/// assert_eq!("3".parse::<LoopMode>().unwrap(), LoopMode::Shuffle);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopMode {
    /// Repeat the whole queue.
    LoopAll,
    /// Repeat the current track.
    LoopOne,
    /// Repeat the whole queue in shuffled order.
    LoopAllShuffle,
    /// Shuffle without repeating.
    Shuffle,
    /// Play the queue once, in order.
    Sequence,
    /// Repeat the current track with shuffle enabled.
    LoopOneShuffle,
}

impl LoopMode {
    /// All loop modes, in wire-code order.
    pub const ALL: [Self; 6] = [
        Self::LoopAll,
        Self::LoopOne,
        Self::LoopAllShuffle,
        Self::Shuffle,
        Self::Sequence,
        Self::LoopOneShuffle,
    ];

    /// Returns the wire value sent to the device.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LoopAll => "0",
            Self::LoopOne => "1",
            Self::LoopAllShuffle => "2",
            Self::Shuffle => "3",
            Self::Sequence => "4",
            Self::LoopOneShuffle => "5",
        }
    }

    /// Returns whether tracks are played in shuffled order.
    #[must_use]
    pub const fn is_shuffle(&self) -> bool {
        matches!(
            self,
            Self::LoopAllShuffle | Self::Shuffle | Self::LoopOneShuffle
        )
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoopMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| ValueError::InvalidLoopMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loop_mode_wire_codes_are_unique() {
        for mode in LoopMode::ALL {
            assert_eq!(mode.as_str().parse::<LoopMode>().unwrap(), mode);
        }
    }

    #[test]
    fn loop_mode_from_invalid_code() {
        assert_eq!(
            "7".parse::<LoopMode>(),
            Err(ValueError::InvalidLoopMode("7".to_string()))
        );
        assert!("".parse::<LoopMode>().is_err());
    }

    #[test]
    fn loop_mode_shuffle_flag() {
        assert!(LoopMode::Shuffle.is_shuffle());
        assert!(LoopMode::LoopOneShuffle.is_shuffle());
        assert!(!LoopMode::Sequence.is_shuffle());
        assert!(!LoopMode::LoopAll.is_shuffle());
    }
}
