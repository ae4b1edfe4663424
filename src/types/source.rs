// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Input source and playback mode constants.

use std::fmt;

/// Input source selectable with `setPlayerCmd:switchmode:<source>`.
///
/// The device decides which sources it accepts; the client forwards the name
/// unchanged. Use [`Source::Other`] for firmware-specific inputs that have no
/// dedicated variant.
///
/// # Examples
///
/// ```
/// use wiim_lib::types::Source;
///
/// assert_eq!(Source::LineIn.as_str(), "line-in");
/// assert_eq!(Source::Other("HDMI".to_string()).as_str(), "HDMI");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Source {
    /// Analog line input.
    LineIn,
    /// Bluetooth receiver.
    Bluetooth,
    /// Optical (TOSLINK) input.
    Optical,
    /// USB disk.
    Udisk,
    /// Network streaming.
    Wifi,
    /// Any other source name, sent verbatim.
    Other(String),
}

impl Source {
    /// Returns the wire value sent to the device.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::LineIn => "line-in",
            Self::Bluetooth => "bluetooth",
            Self::Optical => "optical",
            Self::Udisk => "udisk",
            Self::Wifi => "wifi",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Source {
    fn from(name: &str) -> Self {
        match name {
            "line-in" => Self::LineIn,
            "bluetooth" => Self::Bluetooth,
            "optical" => Self::Optical,
            "udisk" => Self::Udisk,
            "wifi" => Self::Wifi,
            other => Self::Other(other.to_string()),
        }
    }
}

/// What the device is currently playing from, as reported in the `mode`
/// field of `getPlayerStatus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaybackMode {
    /// Idle.
    None,
    /// `AirPlay` or `AirPlay` 2.
    AirPlay,
    /// Third-party DLNA renderer.
    Dlna,
    /// Default network playback.
    Default,
    /// Playlist from a USB disk.
    UdiskPlaylist,
    /// Playlist from a TF card.
    TfPlaylist,
    /// Spotify Connect.
    Spotify,
    /// TIDAL Connect.
    Tidal,
    /// Analog line input.
    LineIn,
    /// Bluetooth receiver.
    Bluetooth,
    /// External storage.
    ExternalStorage,
    /// Optical input.
    Optical,
    /// Mirroring.
    Mirror,
    /// Voice mail playback.
    Voicemail,
    /// Follower in a multiroom group.
    Slave,
    /// A code this library does not know about.
    Unknown(u16),
}

impl PlaybackMode {
    /// Returns the numeric code used by the device.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::None => 0,
            Self::AirPlay => 1,
            Self::Dlna => 2,
            Self::Default => 10,
            Self::UdiskPlaylist => 11,
            Self::TfPlaylist => 16,
            Self::Spotify => 31,
            Self::Tidal => 32,
            Self::LineIn => 40,
            Self::Bluetooth => 41,
            Self::ExternalStorage => 42,
            Self::Optical => 43,
            Self::Mirror => 50,
            Self::Voicemail => 60,
            Self::Slave => 99,
            Self::Unknown(code) => *code,
        }
    }
}

impl From<u16> for PlaybackMode {
    fn from(code: u16) -> Self {
        match code {
            0 => Self::None,
            1 => Self::AirPlay,
            2 => Self::Dlna,
            10 => Self::Default,
            11 => Self::UdiskPlaylist,
            16 => Self::TfPlaylist,
            31 => Self::Spotify,
            32 => Self::Tidal,
            40 => Self::LineIn,
            41 => Self::Bluetooth,
            42 => Self::ExternalStorage,
            43 => Self::Optical,
            50 => Self::Mirror,
            60 => Self::Voicemail,
            99 => Self::Slave,
            other => Self::Unknown(other),
        }
    }
}
