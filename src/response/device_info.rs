// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device information parsing (`getStatusEx`).

use std::collections::HashMap;

use serde::Deserialize;

/// Response from `getStatusEx`.
///
/// The firmware reports dozens of fields whose presence varies between
/// models and releases. The identifying ones are typed; everything else is
/// kept in [`extra`](Self::extra).
///
/// # Examples
///
/// ```
/// use wiim_lib::response::DeviceInfo;
///
/// let json = r#"{
///     "uuid": "FF31F09E1A5020113B0A3E6A",
///     "DeviceName": "Living Room",
///     "firmware": "Linkplay.4.6.415145",
///     "project": "WiiM_Pro_with_gc4a",
///     "RSSI": "-52"
/// }"#;
/// let info: DeviceInfo = serde_json::from_str(json).unwrap();
/// assert_eq!(info.device_name, "Living Room");
/// assert_eq!(info.get("RSSI"), Some("-52"));
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DeviceInfo {
    /// Unique device identifier.
    pub uuid: String,

    /// User-assigned device name.
    #[serde(rename = "DeviceName")]
    pub device_name: String,

    /// Firmware version string.
    pub firmware: String,

    /// Hardware project identifier (model).
    #[serde(default)]
    pub project: Option<String>,

    /// Firmware release date.
    #[serde(rename = "Release", default)]
    pub release: Option<String>,

    /// Hardware revision.
    #[serde(default)]
    pub hardware: Option<String>,

    /// MAC address of the primary interface.
    #[serde(rename = "MAC", default)]
    pub mac: Option<String>,

    /// Network SSID the device is joined to.
    #[serde(default)]
    pub essid: Option<String>,

    /// IP address on the Wi-Fi interface.
    #[serde(default)]
    pub apcli0: Option<String>,

    /// IP address on the Ethernet interface.
    #[serde(default)]
    pub eth0: Option<String>,

    /// Multiroom group name.
    #[serde(rename = "GroupName", default)]
    pub group_name: Option<String>,

    /// Every other key/value pair the device reported.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl DeviceInfo {
    /// Returns an untyped field as a string, if present and a string.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.extra.get(key).and_then(serde_json::Value::as_str)
    }

    /// Returns the device IP address, preferring Wi-Fi over Ethernet.
    #[must_use]
    pub fn ip_address(&self) -> Option<&str> {
        [self.apcli0.as_deref(), self.eth0.as_deref()]
            .into_iter()
            .flatten()
            .find(|ip| !ip.is_empty() && *ip != "0.0.0.0")
    }
}
