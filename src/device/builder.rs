// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device builder.

use std::time::Duration;

use crate::device::Device;
use crate::error::Error;
use crate::protocol::HttpConfig;

/// Builder for creating a [`Device`] with custom configuration.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use wiim_lib::Device;
///
/// # async fn example() -> wiim_lib::Result<()> {
/// let device = Device::builder("192.168.1.42")
///     .with_timeout(Duration::from_secs(3))
///     .build()?;
///
/// device.play().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct DeviceBuilder {
    config: HttpConfig,
}

impl DeviceBuilder {
    pub(crate) fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Uses a caller-owned HTTP session.
    ///
    /// The device will never release this session; [`Device::close`] only
    /// detaches from it.
    #[must_use]
    pub fn with_session(mut self, session: reqwest::Client) -> Self {
        self.config = self.config.with_session(session);
        self
    }

    /// Returns the configuration built so far.
    #[must_use]
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Builds the device. No request is sent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unreachable`] if no session was supplied and the HTTP
    /// session cannot be created.
    pub fn build(self) -> Result<Device, Error> {
        let client = self.config.into_client()?;
        Ok(Device::from_client(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let builder = DeviceBuilder::new(HttpConfig::new("192.168.1.42"));
        assert_eq!(builder.config().timeout(), HttpConfig::DEFAULT_TIMEOUT);
        assert!(!builder.config().has_session());
    }

    #[test]
    fn builder_with_timeout() {
        let builder =
            DeviceBuilder::new(HttpConfig::new("192.168.1.42")).with_timeout(Duration::from_secs(1));
        assert_eq!(builder.config().timeout(), Duration::from_secs(1));
    }

    #[test]
    fn builder_with_session_is_not_owned() {
        let device = DeviceBuilder::new(HttpConfig::new("192.168.1.42"))
            .with_session(reqwest::Client::new())
            .build()
            .unwrap();
        assert!(!device.owns_session());
    }

    #[test]
    fn builder_without_session_is_owned() {
        let device = DeviceBuilder::new(HttpConfig::new("192.168.1.42"))
            .build()
            .unwrap();
        assert!(device.owns_session());
        assert_eq!(device.base_url(), "https://192.168.1.42");
    }
}
