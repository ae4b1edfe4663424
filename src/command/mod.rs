// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device command definitions.
//!
//! Every operation the device supports is one variant of [`Command`]. A
//! variant knows its wire name, its arguments, and the shape of the body the
//! device answers with ([`ResponseKind`]).
//!
//! # Available Commands
//!
//! | Variant | Wire command | Response |
//! |---------|--------------|----------|
//! | [`Command::GetDeviceInfo`] | `getStatusEx` | JSON object |
//! | [`Command::GetConnectionStatus`] | `wlanGetConnectState` | text token |
//! | [`Command::GetPlayerStatus`] | `getPlayerStatus` | JSON object |
//! | [`Command::GetEqStatus`] | `EQGetStat` | JSON object |
//! | [`Command::GetEqPresets`] | `EQGetList` | JSON array |
//! | [`Command::GetShutdownTimer`] | `getShutdown` | integer |
//! | [`Command::Pause`] .. [`Command::Stop`] | `setPlayerCmd:<action>` | status token |
//! | [`Command::Seek`] | `setPlayerCmd:seek:<seconds>` | status token |
//! | [`Command::SetVolume`] | `setPlayerCmd:vol:<0-100>` | status token |
//! | [`Command::SetMute`] | `setPlayerCmd:mute:<0/1>` | status token |
//! | [`Command::SetLoopMode`] | `setPlayerCmd:loopmode:<n>` | status token |
//! | [`Command::EqOn`] / [`Command::EqOff`] | `EQOn` / `EQOff` | status token |
//! | [`Command::EqLoad`] | `EQLoad:<preset>` | status token |
//! | [`Command::SetSource`] | `setPlayerCmd:switchmode:<source>` | status token |
//! | [`Command::PlayUrl`] | `setPlayerCmd:play:<url>` | status token |
//! | [`Command::Reboot`] | `reboot` | status token |
//! | [`Command::SetShutdown`] | `setShutdown:<seconds>` | status token |
//!
//! # Examples
//!
//! ```
//! use wiim_lib::command::{Command, ResponseKind};
//! use wiim_lib::types::Volume;
//!
//! let cmd = Command::SetVolume(Volume::new(40).unwrap());
//! assert_eq!(cmd.name(), "setPlayerCmd:vol");
//! assert_eq!(cmd.to_http_command(), "setPlayerCmd:vol:40");
//! assert_eq!(cmd.response_kind(), ResponseKind::Status);
//! ```

use crate::types::{LoopMode, MuteState, Source, Volume};

/// Separator between the command name and each argument.
pub const ARGUMENT_SEPARATOR: char = ':';

/// Shape of the body the device answers a command with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseKind {
    /// A JSON object or array.
    Json,
    /// A status token, bare (`OK`) or wrapped (`{"status":"OK"}`).
    Status,
    /// A bare integer.
    Integer,
    /// A bare text token.
    Text,
}

/// A command understood by the device's `httpapi.asp` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query firmware, network and hardware details.
    GetDeviceInfo,
    /// Query the Wi-Fi connection state.
    GetConnectionStatus,
    /// Query the playback status (source, track, position, volume).
    GetPlayerStatus,
    /// Query whether the equalizer is enabled.
    GetEqStatus,
    /// List the equalizer preset names.
    GetEqPresets,
    /// Query the seconds left on the shutdown timer.
    GetShutdownTimer,
    /// Pause playback.
    Pause,
    /// Resume playback.
    Play,
    /// Toggle between play and pause.
    Toggle,
    /// Skip to the previous track.
    Previous,
    /// Skip to the next track.
    Next,
    /// Stop playback.
    Stop,
    /// Seek to a position, in seconds. Sent as a signed integer.
    Seek(i32),
    /// Set the absolute volume.
    SetVolume(Volume),
    /// Mute or unmute the output.
    SetMute(MuteState),
    /// Set the repeat/shuffle mode.
    SetLoopMode(LoopMode),
    /// Enable the equalizer.
    EqOn,
    /// Disable the equalizer.
    EqOff,
    /// Load an equalizer preset by name.
    EqLoad(String),
    /// Switch the input source.
    SetSource(Source),
    /// Play an audio stream from an absolute URL.
    PlayUrl(String),
    /// Reboot the device.
    Reboot,
    /// Schedule a shutdown in N seconds (0 = now, -1 = cancel).
    SetShutdown(i32),
}

impl Command {
    /// Returns the fixed part of the wire command, without arguments.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GetDeviceInfo => "getStatusEx",
            Self::GetConnectionStatus => "wlanGetConnectState",
            Self::GetPlayerStatus => "getPlayerStatus",
            Self::GetEqStatus => "EQGetStat",
            Self::GetEqPresets => "EQGetList",
            Self::GetShutdownTimer => "getShutdown",
            Self::Pause => "setPlayerCmd:pause",
            Self::Play => "setPlayerCmd:play",
            Self::Toggle => "setPlayerCmd:onepause",
            Self::Previous => "setPlayerCmd:prev",
            Self::Next => "setPlayerCmd:next",
            Self::Stop => "setPlayerCmd:stop",
            Self::Seek(_) => "setPlayerCmd:seek",
            Self::SetVolume(_) => "setPlayerCmd:vol",
            Self::SetMute(_) => "setPlayerCmd:mute",
            Self::SetLoopMode(_) => "setPlayerCmd:loopmode",
            Self::EqOn => "EQOn",
            Self::EqOff => "EQOff",
            Self::EqLoad(_) => "EQLoad",
            Self::SetSource(_) => "setPlayerCmd:switchmode",
            Self::PlayUrl(_) => "setPlayerCmd:play",
            Self::Reboot => "reboot",
            Self::SetShutdown(_) => "setShutdown",
        }
    }

    /// Returns the argument appended after the command name, if any.
    #[must_use]
    pub fn argument(&self) -> Option<String> {
        match self {
            Self::Seek(seconds) => Some(seconds.to_string()),
            Self::SetVolume(volume) => Some(volume.to_string()),
            Self::SetMute(state) => Some(state.as_str().to_string()),
            Self::SetLoopMode(mode) => Some(mode.as_str().to_string()),
            Self::EqLoad(preset) => Some(preset.clone()),
            Self::SetSource(source) => Some(source.as_str().to_string()),
            Self::PlayUrl(url) => Some(url.clone()),
            Self::SetShutdown(seconds) => Some(seconds.to_string()),
            _ => None,
        }
    }

    /// Returns the shape of the body the device answers with.
    #[must_use]
    pub const fn response_kind(&self) -> ResponseKind {
        match self {
            Self::GetDeviceInfo | Self::GetPlayerStatus | Self::GetEqStatus | Self::GetEqPresets => {
                ResponseKind::Json
            }
            Self::GetConnectionStatus => ResponseKind::Text,
            Self::GetShutdownTimer => ResponseKind::Integer,
            _ => ResponseKind::Status,
        }
    }

    /// Returns the command string in human-readable form.
    ///
    /// Format: `<name>:<argument>` or just `<name>` if there is no argument.
    #[must_use]
    pub fn to_http_command(&self) -> String {
        match self.argument() {
            Some(arg) => format!("{}{ARGUMENT_SEPARATOR}{arg}", self.name()),
            None => self.name().to_string(),
        }
    }

    /// Returns the command string as it appears in the request URL.
    ///
    /// The argument is percent-encoded so that spaces, slashes and query
    /// delimiters survive the trip; the `:` separators stay literal.
    ///
    /// ```
    /// use wiim_lib::command::Command;
    ///
    /// let cmd = Command::EqLoad("Bass Booster".to_string());
    /// assert_eq!(cmd.to_query_value(), "EQLoad:Bass%20Booster");
    /// ```
    #[must_use]
    pub fn to_query_value(&self) -> String {
        match self.argument() {
            Some(arg) => format!(
                "{}{ARGUMENT_SEPARATOR}{}",
                self.name(),
                urlencoding::encode(&arg)
            ),
            None => self.name().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_segment(query_value: &str) -> String {
        let raw = query_value
            .rsplit(ARGUMENT_SEPARATOR)
            .next()
            .unwrap_or_default();
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn transport_commands_have_no_argument() {
        let expected = [
            (Command::Pause, "setPlayerCmd:pause"),
            (Command::Play, "setPlayerCmd:play"),
            (Command::Toggle, "setPlayerCmd:onepause"),
            (Command::Previous, "setPlayerCmd:prev"),
            (Command::Next, "setPlayerCmd:next"),
            (Command::Stop, "setPlayerCmd:stop"),
            (Command::Reboot, "reboot"),
            (Command::EqOn, "EQOn"),
            (Command::EqOff, "EQOff"),
        ];

        for (cmd, wire) in expected {
            assert_eq!(cmd.argument(), None);
            assert_eq!(cmd.to_query_value(), wire);
            assert_eq!(cmd.response_kind(), ResponseKind::Status);
        }
    }

    #[test]
    fn query_commands_response_kinds() {
        assert_eq!(Command::GetDeviceInfo.response_kind(), ResponseKind::Json);
        assert_eq!(Command::GetPlayerStatus.response_kind(), ResponseKind::Json);
        assert_eq!(Command::GetEqStatus.response_kind(), ResponseKind::Json);
        assert_eq!(Command::GetEqPresets.response_kind(), ResponseKind::Json);
        assert_eq!(
            Command::GetConnectionStatus.response_kind(),
            ResponseKind::Text
        );
        assert_eq!(
            Command::GetShutdownTimer.response_kind(),
            ResponseKind::Integer
        );
    }

    #[test]
    fn scalar_arguments_are_last_segment() {
        let seek = Command::Seek(95);
        assert_eq!(seek.to_query_value(), "setPlayerCmd:seek:95");
        assert_eq!(last_segment(&seek.to_query_value()).parse::<i32>().unwrap(), 95);

        let rewind = Command::Seek(-5);
        assert_eq!(rewind.to_query_value(), "setPlayerCmd:seek:-5");

        let vol = Command::SetVolume(Volume::new(40).unwrap());
        assert_eq!(vol.to_query_value(), "setPlayerCmd:vol:40");
        assert_eq!(last_segment(&vol.to_query_value()).parse::<u8>().unwrap(), 40);

        let shutdown = Command::SetShutdown(-1);
        assert_eq!(shutdown.to_query_value(), "setShutdown:-1");
        assert_eq!(
            last_segment(&shutdown.to_query_value()).parse::<i32>().unwrap(),
            -1
        );
    }

    #[test]
    fn mute_and_loop_mode_arguments() {
        assert_eq!(
            Command::SetMute(MuteState::Muted).to_http_command(),
            "setPlayerCmd:mute:1"
        );
        assert_eq!(
            Command::SetMute(MuteState::Unmuted).to_http_command(),
            "setPlayerCmd:mute:0"
        );
        assert_eq!(
            Command::SetLoopMode(LoopMode::Shuffle).to_http_command(),
            "setPlayerCmd:loopmode:3"
        );
    }

    #[test]
    fn source_is_passed_verbatim() {
        assert_eq!(
            Command::SetSource(Source::LineIn).to_query_value(),
            "setPlayerCmd:switchmode:line-in"
        );
        assert_eq!(
            Command::SetSource(Source::Other("HDMI".to_string())).to_query_value(),
            "setPlayerCmd:switchmode:HDMI"
        );
    }

    #[test]
    fn eq_preset_name_is_url_encoded() {
        let plain = Command::EqLoad("Jazz".to_string());
        assert_eq!(plain.to_query_value(), "EQLoad:Jazz");

        let spaced = Command::EqLoad("Bass Booster".to_string());
        assert_eq!(spaced.to_http_command(), "EQLoad:Bass Booster");
        assert_eq!(last_segment(&spaced.to_query_value()), "Bass Booster");
    }

    #[test]
    fn play_url_survives_encoding() {
        let url = "https://hd1.wamu.org/wamu-1?aw=1&x=y";
        let cmd = Command::PlayUrl(url.to_string());
        let encoded = cmd.to_query_value();

        assert!(encoded.starts_with("setPlayerCmd:play:"));
        assert!(!encoded.contains('&'));
        assert!(!encoded.contains('?'));

        let arg = encoded.trim_start_matches("setPlayerCmd:play:");
        assert_eq!(urlencoding::decode(arg).unwrap(), url);
    }
}
