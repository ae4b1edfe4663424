// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a WiiM / `LinkPlay` device.
//!
//! Each method sends exactly one request (except
//! [`set_volume_relative`](Device::set_volume_relative), which reads then
//! writes) and decodes the reply. Requests are independent: a `Device` can be
//! shared between tasks and used concurrently.
//!
//! ```no_run
//! use wiim_lib::Device;
//! use wiim_lib::types::{LoopMode, Volume};
//!
//! # async fn example() -> wiim_lib::Result<()> {
//! let device = Device::new("192.168.1.42")?;
//!
//! let status = device.get_playback_status().await?;
//! println!("{} at volume {}", status.state(), status.volume()?);
//!
//! device.set_volume(Volume::new(30)?).await?;
//! device.set_loop_mode(LoopMode::Shuffle).await?;
//! device.close();
//! # Ok(())
//! # }
//! ```

mod builder;

pub use builder::DeviceBuilder;

use crate::command::{Command, ResponseKind};
use crate::error::{Error, ParseError};
use crate::protocol::{CommandResponse, HttpClient, HttpConfig};
use crate::response::{
    ConnectionStatus, DeviceInfo, EqStatus, PlayerStatus, StatusToken, parse_integer,
};
use crate::types::{LoopMode, MuteState, Source, Volume};

/// A WiiM / `LinkPlay` audio streamer reachable over its local HTTP API.
///
/// # Creating a Device
///
/// ```no_run
/// use wiim_lib::Device;
///
/// # fn example() -> wiim_lib::Result<()> {
/// // Session created and owned by the device
/// let device = Device::new("192.168.1.42")?;
///
/// // Session shared with the rest of the application
/// let session = reqwest::Client::builder()
///     .danger_accept_invalid_certs(true)
///     .build()
///     .unwrap();
/// let device = Device::with_session("192.168.1.43", session);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Device {
    client: HttpClient,
}

impl Device {
    /// Creates a device with its own HTTP session.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] if the HTTP session cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, Error> {
        Self::builder(host).build()
    }

    /// Creates a device on a caller-owned HTTP session.
    #[must_use]
    pub fn with_session(host: impl Into<String>, session: reqwest::Client) -> Self {
        Self::from_client(HttpClient::with_session(host, session))
    }

    /// Returns a builder for custom configuration.
    #[must_use]
    pub fn builder(host: impl Into<String>) -> DeviceBuilder {
        DeviceBuilder::new(HttpConfig::new(host))
    }

    pub(crate) fn from_client(client: HttpClient) -> Self {
        Self { client }
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Returns whether the device created, and therefore owns, its session.
    #[must_use]
    pub fn owns_session(&self) -> bool {
        self.client.owns_session()
    }

    /// Closes the device.
    ///
    /// Releases the HTTP session if the device created it and returns `true`.
    /// Returns `false` on subsequent calls and when the session belongs to
    /// the caller. Commands sent after closing fail with
    /// [`Error::Unreachable`].
    pub fn close(&self) -> bool {
        self.client.close()
    }

    /// Sends a command and returns the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] or [`Error::Communication`] if the
    /// request fails.
    pub async fn send_command(&self, command: &Command) -> Result<CommandResponse, Error> {
        self.client.send(command).await
    }

    async fn request(&self, command: &Command) -> Result<Reply, Error> {
        let response = self.send_command(command).await?;
        decode(command, &response)
    }

    async fn query<T: serde::de::DeserializeOwned>(&self, command: Command) -> Result<T, Error> {
        match self.request(&command).await? {
            Reply::Json(response) => Ok(response.parse()?),
            other => Err(mismatch(&command, &other)),
        }
    }

    async fn execute(&self, command: Command) -> Result<(), Error> {
        match self.request(&command).await? {
            Reply::Accepted => Ok(()),
            other => Err(mismatch(&command, &other)),
        }
    }

    // ========== Information ==========

    /// Gets firmware, network and hardware details.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reply lacks `uuid`,
    /// `DeviceName` or `firmware`.
    pub async fn get_device_info(&self) -> Result<DeviceInfo, Error> {
        self.query(Command::GetDeviceInfo).await
    }

    /// Gets the Wi-Fi connection state.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails. Tokens this library does not know
    /// are returned as [`ConnectionStatus::Other`].
    pub async fn get_connection_status(&self) -> Result<ConnectionStatus, Error> {
        let command = Command::GetConnectionStatus;
        match self.request(&command).await? {
            Reply::Text(token) => Ok(ConnectionStatus::from(token.as_str())),
            other => Err(mismatch(&command, &other)),
        }
    }

    /// Gets the playback status.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reply is not a status object.
    pub async fn get_playback_status(&self) -> Result<PlayerStatus, Error> {
        self.query(Command::GetPlayerStatus).await
    }

    /// Returns whether the equalizer is enabled.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reply is malformed.
    pub async fn get_eq_status(&self) -> Result<bool, Error> {
        let status: EqStatus = self.query(Command::GetEqStatus).await?;
        Ok(status.is_enabled()?)
    }

    /// Lists the equalizer preset names known to the device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reply is not a list of names.
    pub async fn get_eq_presets(&self) -> Result<Vec<String>, Error> {
        let presets: Vec<String> = self.query(Command::GetEqPresets).await?;
        tracing::debug!(count = presets.len(), "Received EQ presets");
        Ok(presets)
    }

    /// Gets the seconds left on the shutdown timer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the reply is not an integer.
    pub async fn get_shutdown_timer(&self) -> Result<i64, Error> {
        let command = Command::GetShutdownTimer;
        match self.request(&command).await? {
            Reply::Integer(seconds) => Ok(seconds),
            other => Err(mismatch(&command, &other)),
        }
    }

    /// Gets the title of the current track.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the title cannot be decoded.
    pub async fn get_track(&self) -> Result<String, Error> {
        Ok(self.get_playback_status().await?.title()?)
    }

    /// Gets the album of the current track.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the album cannot be decoded.
    pub async fn get_album(&self) -> Result<String, Error> {
        Ok(self.get_playback_status().await?.album()?)
    }

    /// Gets the artist of the current track.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the artist cannot be decoded.
    pub async fn get_artist(&self) -> Result<String, Error> {
        Ok(self.get_playback_status().await?.artist()?)
    }

    // ========== Transport ==========

    /// Pauses playback.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn pause(&self) -> Result<(), Error> {
        self.execute(Command::Pause).await
    }

    /// Resumes playback.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn play(&self) -> Result<(), Error> {
        self.execute(Command::Play).await
    }

    /// Toggles between play and pause.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn toggle(&self) -> Result<(), Error> {
        self.execute(Command::Toggle).await
    }

    /// Skips to the previous track.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn previous(&self) -> Result<(), Error> {
        self.execute(Command::Previous).await
    }

    /// Skips to the next track.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn next(&self) -> Result<(), Error> {
        self.execute(Command::Next).await
    }

    /// Stops playback.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn stop(&self) -> Result<(), Error> {
        self.execute(Command::Stop).await
    }

    /// Seeks to a position in the current track, in seconds.
    ///
    /// The value is forwarded as given; the device decides how to treat a
    /// negative position.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn seek(&self, seconds: i32) -> Result<(), Error> {
        self.execute(Command::Seek(seconds)).await
    }

    // ========== Volume ==========

    /// Sets the absolute volume.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_volume(&self, volume: Volume) -> Result<(), Error> {
        self.execute(Command::SetVolume(volume)).await
    }

    /// Shifts the volume by a signed amount, clamped to 0-100.
    ///
    /// Reads the current volume from the playback status, then sets the
    /// shifted value. Nothing is written if the read fails. Returns the
    /// volume that was set.
    ///
    /// # Errors
    ///
    /// Returns error if either request fails, the current volume cannot be
    /// parsed, or the device rejects the new value.
    pub async fn set_volume_relative(&self, delta: i32) -> Result<Volume, Error> {
        let current = self.get_playback_status().await?.volume()?;
        let target = current.offset(delta);

        tracing::debug!(
            current = current.value(),
            delta,
            target = target.value(),
            "Adjusting volume"
        );

        self.set_volume(target).await?;
        Ok(target)
    }

    /// Mutes the output.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn mute(&self) -> Result<(), Error> {
        self.execute(Command::SetMute(MuteState::Muted)).await
    }

    /// Unmutes the output.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn unmute(&self) -> Result<(), Error> {
        self.execute(Command::SetMute(MuteState::Unmuted)).await
    }

    // ========== Mode, EQ and source ==========

    /// Sets the repeat/shuffle mode.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_loop_mode(&self, mode: LoopMode) -> Result<(), Error> {
        self.execute(Command::SetLoopMode(mode)).await
    }

    /// Enables the equalizer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn enable_eq(&self) -> Result<(), Error> {
        self.execute(Command::EqOn).await
    }

    /// Disables the equalizer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn disable_eq(&self) -> Result<(), Error> {
        self.execute(Command::EqOff).await
    }

    /// Loads an equalizer preset by name.
    ///
    /// The name should be one returned by
    /// [`get_eq_presets`](Self::get_eq_presets); the device decides.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Command`] if the device does not know the preset.
    pub async fn load_eq(&self, preset: &str) -> Result<(), Error> {
        self.execute(Command::EqLoad(preset.to_string())).await
    }

    /// Switches the input source.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn set_source(&self, source: Source) -> Result<(), Error> {
        self.execute(Command::SetSource(source)).await
    }

    /// Plays an audio stream from an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn play_audio_url(&self, url: &str) -> Result<(), Error> {
        self.execute(Command::PlayUrl(url.to_string())).await
    }

    // ========== Power ==========

    /// Reboots the device.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn reboot(&self) -> Result<(), Error> {
        self.execute(Command::Reboot).await
    }

    /// Schedules a shutdown.
    ///
    /// A delay of 0 shuts down immediately; -1 cancels a pending timer.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the device rejects it.
    pub async fn schedule_shutdown(&self, seconds: i32) -> Result<(), Error> {
        self.execute(Command::SetShutdown(seconds)).await
    }
}

/// A reply decoded according to the [`ResponseKind`] of its command.
#[derive(Debug)]
enum Reply {
    /// JSON body, parsed into a concrete type by the caller.
    Json(CommandResponse),
    /// Status token `OK`.
    Accepted,
    Integer(i64),
    Text(String),
}

fn decode(command: &Command, response: &CommandResponse) -> Result<Reply, Error> {
    match command.response_kind() {
        ResponseKind::Json => Ok(Reply::Json(response.clone())),
        ResponseKind::Status => {
            let token = StatusToken::parse(response.body())?;
            if token.is_ok() {
                return Ok(Reply::Accepted);
            }

            tracing::warn!(
                command = %command.to_http_command(),
                reply = %token,
                "Device rejected command"
            );
            Err(Error::Command {
                command: command.to_http_command(),
                reply: token.as_str().to_string(),
            })
        }
        ResponseKind::Integer => Ok(Reply::Integer(parse_integer(
            command.name(),
            response.body(),
        )?)),
        ResponseKind::Text => Ok(Reply::Text(response.body().trim().to_string())),
    }
}

fn mismatch(command: &Command, reply: &Reply) -> Error {
    ParseError::UnexpectedFormat(format!(
        "`{}` decoded as {reply:?}",
        command.name()
    ))
    .into()
}
