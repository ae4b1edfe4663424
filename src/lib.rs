// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `wiim_lib` - A Rust library to control WiiM / `LinkPlay` audio streamers.
//!
//! This library provides an async client for the device's local HTTP API
//! (`https://<host>/httpapi.asp?command=<command>`).
//!
//! # Supported Features
//!
//! - **Information**: device details, Wi-Fi state, playback status, track
//!   metadata, EQ presets, shutdown timer
//! - **Transport**: play, pause, toggle, previous, next, stop, seek
//! - **Volume**: absolute and relative volume, mute
//! - **Modes**: loop/shuffle mode, input source, equalizer presets
//! - **Playback**: play an audio stream from a URL
//! - **Power**: reboot, scheduled shutdown
//!
//! The device serves a self-signed certificate; sessions created by this
//! library accept it. Each command is a single stateless request, so one
//! [`Device`] can be shared between concurrent tasks.
//!
//! # Quick Start
//!
//! ```no_run
//! use wiim_lib::Device;
//! use wiim_lib::types::Source;
//!
//! #[tokio::main]
//! async fn main() -> wiim_lib::Result<()> {
//!     let device = Device::new("192.168.1.42")?;
//!
//!     let info = device.get_device_info().await?;
//!     println!("{} running {}", info.device_name, info.firmware);
//!
//!     device.set_source(Source::Optical).await?;
//!     device.set_volume_relative(-5).await?;
//!
//!     device.close();
//!     Ok(())
//! }
//! ```
//!
//! # Errors
//!
//! Every command returns one of four failure kinds, see [`Error`]:
//! unreachable device, non-success HTTP status, malformed response, or a
//! command the device rejected.

pub mod command;
mod device;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use command::{Command, ResponseKind};
pub use device::{Device, DeviceBuilder};
pub use error::{ConnectionError, Error, ParseError, Result, ValueError};
pub use protocol::{CommandResponse, HttpClient, HttpConfig};
pub use response::{
    ConnectionStatus, DeviceInfo, EqStatus, PlaybackState, PlayerStatus, StatusToken,
};
pub use types::{LoopMode, MuteState, PlaybackMode, Source, Volume};
