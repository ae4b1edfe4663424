// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests against a real WiiM device.
//!
//! These tests require a device on the network and are ignored by default.
//! Run with: `cargo test --test real_device -- --ignored --test-threads=1`
//!
//! # Environment Variables
//!
//! - `WIIM_HOST` - Device IP address or hostname (required)
//! - `WIIM_EQ_PRESET` - Preset to load in the EQ test (default: `Flat`)
//!
//! # Example
//!
//! ```bash
//! export WIIM_HOST=192.168.1.42
//! cargo test --test real_device -- --ignored --test-threads=1
//! ```
//!
//! The tests restore the volume, mute and EQ settings they change.

use std::env;
use std::time::Duration;

use tokio::time::sleep;
use wiim_lib::Device;

/// Delay between a write and the read that checks it.
const SETTLE: Duration = Duration::from_millis(500);

fn device() -> Device {
    let host = env::var("WIIM_HOST").expect("WIIM_HOST not set");
    Device::builder(host)
        .with_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to create device")
}

#[tokio::test]
#[ignore = "requires a real device (WIIM_HOST)"]
async fn reads_device_information() {
    let device = device();

    let info = device.get_device_info().await.unwrap();
    assert!(!info.uuid.is_empty());
    assert!(!info.firmware.is_empty());

    let status = device.get_playback_status().await.unwrap();
    status.volume().unwrap();

    device.get_connection_status().await.unwrap();
    device.get_shutdown_timer().await.unwrap();

    assert!(device.close());
}

#[tokio::test]
#[ignore = "requires a real device (WIIM_HOST)"]
async fn relative_volume_round_trip() {
    let device = device();
    let original = device.get_playback_status().await.unwrap().volume().unwrap();

    let lowered = device.set_volume_relative(-5).await.unwrap();
    sleep(SETTLE).await;
    let observed = device.get_playback_status().await.unwrap().volume().unwrap();
    assert_eq!(observed, lowered);

    device.set_volume(original).await.unwrap();
    device.close();
}

#[tokio::test]
#[ignore = "requires a real device (WIIM_HOST)"]
async fn mute_round_trip() {
    let device = device();
    let was_muted = device
        .get_playback_status()
        .await
        .unwrap()
        .is_muted()
        .unwrap();

    device.mute().await.unwrap();
    sleep(SETTLE).await;
    assert!(device.get_playback_status().await.unwrap().is_muted().unwrap());

    if !was_muted {
        device.unmute().await.unwrap();
    }
    device.close();
}

#[tokio::test]
#[ignore = "requires a real device (WIIM_HOST)"]
async fn eq_preset_round_trip() {
    let device = device();
    let preset = env::var("WIIM_EQ_PRESET").unwrap_or_else(|_| "Flat".to_string());

    let presets = device.get_eq_presets().await.unwrap();
    assert!(presets.contains(&preset), "{preset} not in {presets:?}");

    let was_enabled = device.get_eq_status().await.unwrap();
    device.load_eq(&preset).await.unwrap();

    if !was_enabled {
        device.disable_eq().await.unwrap();
    }
    device.close();
}
