// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Playback status parsing (`getPlayerStatus`).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ParseError;
use crate::types::{LoopMode, PlaybackMode, Volume};

/// Transport state reported in the `status` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// Playing.
    Playing,
    /// Paused.
    Paused,
    /// Stopped.
    Stopped,
    /// Buffering or loading a stream.
    Loading,
    /// Nothing queued.
    Idle,
    /// A state this library does not know about.
    Other(String),
}

impl From<&str> for PlaybackState {
    fn from(s: &str) -> Self {
        match s {
            "play" => Self::Playing,
            "pause" => Self::Paused,
            "stop" => Self::Stopped,
            "load" => Self::Loading,
            "none" => Self::Idle,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Playing => f.write_str("play"),
            Self::Paused => f.write_str("pause"),
            Self::Stopped => f.write_str("stop"),
            Self::Loading => f.write_str("load"),
            Self::Idle => f.write_str("none"),
            Self::Other(s) => f.write_str(s),
        }
    }
}

/// Response from `getPlayerStatus`.
///
/// The device reports every value as a JSON string. Raw values are kept as
/// received; typed accessors parse them on demand and fail with
/// [`ParseError::InvalidValue`] when a value is malformed.
///
/// Track metadata (`Title`, `Artist`, `Album`) is hex-encoded UTF-8.
///
/// # Examples
///
/// ```
/// use wiim_lib::response::{PlaybackState, PlayerStatus};
///
/// let json = r#"{"status": "play", "vol": "39", "mute": "0", "loop": "4", "Title": "54696d65"}"#;
/// let status: PlayerStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.state(), PlaybackState::Playing);
/// assert_eq!(status.volume().unwrap().value(), 39);
/// assert_eq!(status.title().unwrap(), "Time");
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatus {
    /// Transport state (`play`, `pause`, `stop`, `load`, `none`).
    pub status: String,

    /// Volume, 0-100.
    pub vol: String,

    /// Mute flag (`0` or `1`).
    #[serde(default)]
    pub mute: Option<String>,

    /// Playback mode code, see [`PlaybackMode`].
    #[serde(default)]
    pub mode: Option<String>,

    /// Loop mode code, see [`LoopMode`].
    #[serde(rename = "loop", default)]
    pub loop_mode: Option<String>,

    /// Equalizer preset index.
    #[serde(default)]
    pub eq: Option<String>,

    /// Playback position in milliseconds.
    #[serde(default)]
    pub curpos: Option<String>,

    /// Track length in milliseconds.
    #[serde(default)]
    pub totlen: Option<String>,

    /// Number of tracks in the current playlist.
    #[serde(default)]
    pub plicount: Option<String>,

    /// Index of the current track in the playlist.
    #[serde(default)]
    pub plicurr: Option<String>,

    /// Hex-encoded track title.
    #[serde(rename = "Title", alias = "title", default)]
    pub title_hex: Option<String>,

    /// Hex-encoded artist name.
    #[serde(rename = "Artist", alias = "artist", default)]
    pub artist_hex: Option<String>,

    /// Hex-encoded album name.
    #[serde(rename = "Album", alias = "album", default)]
    pub album_hex: Option<String>,
}

impl PlayerStatus {
    /// Returns the transport state.
    #[must_use]
    pub fn state(&self) -> PlaybackState {
        PlaybackState::from(self.status.as_str())
    }

    /// Returns the current volume.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` if `vol` is not an integer in 0-100.
    pub fn volume(&self) -> Result<Volume, ParseError> {
        let raw: u8 = parse_field("vol", &self.vol)?;
        Volume::new(raw).map_err(|e| ParseError::InvalidValue {
            field: "vol".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns whether the output is muted.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `mute` is missing or not `0`/`1`.
    pub fn is_muted(&self) -> Result<bool, ParseError> {
        match required("mute", self.mute.as_deref())? {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(ParseError::InvalidValue {
                field: "mute".to_string(),
                message: format!("expected 0 or 1, got {other:?}"),
            }),
        }
    }

    /// Returns the loop mode.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `loop` is missing or an unknown code.
    pub fn loop_mode(&self) -> Result<LoopMode, ParseError> {
        parse_field("loop", required("loop", self.loop_mode.as_deref())?)
    }

    /// Returns what the device is playing from.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `mode` is missing or not numeric.
    pub fn playback_mode(&self) -> Result<PlaybackMode, ParseError> {
        let code: u16 = parse_field("mode", required("mode", self.mode.as_deref())?)?;
        Ok(PlaybackMode::from(code))
    }

    /// Returns the playback position.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `curpos` is missing or not numeric.
    pub fn position(&self) -> Result<Duration, ParseError> {
        millis("curpos", self.curpos.as_deref())
    }

    /// Returns the length of the current track.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `totlen` is missing or not numeric.
    pub fn duration(&self) -> Result<Duration, ParseError> {
        millis("totlen", self.totlen.as_deref())
    }

    /// Returns the decoded track title.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `Title` is missing or not hex-encoded UTF-8.
    pub fn title(&self) -> Result<String, ParseError> {
        decode_hex_text("Title", self.title_hex.as_deref())
    }

    /// Returns the decoded artist name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `Artist` is missing or not hex-encoded UTF-8.
    pub fn artist(&self) -> Result<String, ParseError> {
        decode_hex_text("Artist", self.artist_hex.as_deref())
    }

    /// Returns the decoded album name.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if `Album` is missing or not hex-encoded UTF-8.
    pub fn album(&self) -> Result<String, ParseError> {
        decode_hex_text("Album", self.album_hex.as_deref())
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ParseError> {
    value.ok_or_else(|| ParseError::MissingField(field.to_string()))
}

fn parse_field<T>(field: &str, value: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ParseError::InvalidValue {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn millis(field: &str, value: Option<&str>) -> Result<Duration, ParseError> {
    let ms: u64 = parse_field(field, required(field, value)?)?;
    Ok(Duration::from_millis(ms))
}

fn decode_hex_text(field: &str, value: Option<&str>) -> Result<String, ParseError> {
    let invalid = |message: String| ParseError::InvalidValue {
        field: field.to_string(),
        message,
    };

    let bytes = hex::decode(required(field, value)?).map_err(|e| invalid(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PlayerStatus {
        let json = r#"{
            "type": "0",
            "ch": "0",
            "mode": "31",
            "loop": "4",
            "eq": "0",
            "status": "play",
            "curpos": "184919",
            "offset_pts": "184919",
            "totlen": "413000",
            "Title": "54696D65",
            "Artist": "50696E6B20466C6F7964",
            "Album": "546865204461726B2053696465206F6620746865204D6F6F6E",
            "alarmflag": "0",
            "plicount": "10",
            "plicurr": "4",
            "vol": "39",
            "mute": "0"
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn parse_player_status() {
        let status = sample();
        assert_eq!(status.state(), PlaybackState::Playing);
        assert_eq!(status.volume().unwrap().value(), 39);
        assert!(!status.is_muted().unwrap());
        assert_eq!(status.loop_mode().unwrap(), LoopMode::Sequence);
        assert_eq!(status.playback_mode().unwrap(), PlaybackMode::Spotify);
        assert_eq!(status.position().unwrap(), Duration::from_millis(184_919));
        assert_eq!(status.duration().unwrap(), Duration::from_secs(413));
    }

    #[test]
    fn decode_track_metadata() {
        let status = sample();
        assert_eq!(status.title().unwrap(), "Time");
        assert_eq!(status.artist().unwrap(), "Pink Floyd");
        assert_eq!(status.album().unwrap(), "The Dark Side of the Moon");
    }

    #[test]
    fn invalid_hex_metadata_is_an_error() {
        let json = r#"{"status": "play", "vol": "10", "Title": "not hex"}"#;
        let status: PlayerStatus = serde_json::from_str(json).unwrap();
        assert!(matches!(
            status.title(),
            Err(ParseError::InvalidValue { ref field, .. }) if field == "Title"
        ));
        assert!(matches!(status.artist(), Err(ParseError::MissingField(_))));
    }

    #[test]
    fn out_of_range_volume_is_an_error() {
        let json = r#"{"status": "stop", "vol": "140"}"#;
        let status: PlayerStatus = serde_json::from_str(json).unwrap();
        assert!(matches!(
            status.volume(),
            Err(ParseError::InvalidValue { ref field, .. }) if field == "vol"
        ));
    }

    #[test]
    fn non_numeric_volume_is_an_error() {
        let json = r#"{"status": "stop", "vol": "loud"}"#;
        let status: PlayerStatus = serde_json::from_str(json).unwrap();
        assert!(status.volume().is_err());
    }

    #[test]
    fn missing_volume_fails_deserialization() {
        let json = r#"{"status": "play"}"#;
        let result: Result<PlayerStatus, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn playback_state_round_trips_through_display() {
        for raw in ["play", "pause", "stop", "load", "none", "buffering"] {
            assert_eq!(PlaybackState::from(raw).to_string(), raw);
        }
    }
}
