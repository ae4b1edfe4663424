// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the device's `httpapi.asp` endpoint.
//!
//! - [`HttpConfig`]: connection parameters and session creation
//! - [`HttpClient`]: URL building, request execution and session ownership
//! - [`CommandResponse`]: the raw body returned by the device

mod http;

pub use http::{API_PATH, HttpClient, HttpConfig};

use crate::error::ParseError;

/// Raw response to a device command.
#[derive(Debug, Clone)]
pub struct CommandResponse {
    body: String,
}

impl CommandResponse {
    /// Creates a new command response with the given body.
    #[must_use]
    pub fn new(body: String) -> Self {
        Self { body }
    }

    /// Returns the raw response body.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Parses the response as JSON into a specific type.
    ///
    /// # Errors
    ///
    /// Returns error if the JSON cannot be parsed into the target type.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(Into::into)
    }
}
