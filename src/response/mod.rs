// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response parsing for device replies.
//!
//! The device answers in one of three shapes: a JSON object, a status token
//! (bare or JSON-wrapped), or a bare scalar. Each type here corresponds to a
//! specific command.

mod device_info;
mod player_status;
mod status;

pub use device_info::DeviceInfo;
pub use player_status::{PlaybackState, PlayerStatus};
pub use status::{ConnectionStatus, EqStatus, STATUS_OK, StatusToken, parse_integer};
