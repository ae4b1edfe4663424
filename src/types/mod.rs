// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types and enumerated constants for device control.
//!
//! # Types
//!
//! - [`Volume`] - Volume level (0-100)
//! - [`MuteState`] - Mute flag
//! - [`LoopMode`] - Repeat/shuffle behavior
//! - [`Source`] - Input selection, passed to the device verbatim
//! - [`PlaybackMode`] - Current playback origin reported by the device

mod loop_mode;
mod source;
mod volume;

pub use loop_mode::LoopMode;
pub use source::{PlaybackMode, Source};
pub use volume::{MuteState, Volume};
