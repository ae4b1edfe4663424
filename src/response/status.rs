// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status token and scalar response parsing.
//!
//! Action commands answer with a short token. Older endpoints send it bare
//! (`OK`), the equalizer endpoints wrap it in JSON (`{"status":"OK"}`).

use std::fmt;

use serde::Deserialize;

use crate::error::ParseError;

/// The token that signals success.
pub const STATUS_OK: &str = "OK";

#[derive(Debug, Deserialize)]
struct WrappedStatus {
    status: String,
}

/// Status token returned by an action command.
///
/// # Examples
///
/// ```
/// use wiim_lib::response::StatusToken;
///
/// assert!(StatusToken::parse("OK").unwrap().is_ok());
/// assert!(StatusToken::parse(r#"{"status":"OK"}"#).unwrap().is_ok());
/// assert!(!StatusToken::parse(r#"{"status":"Failed"}"#).unwrap().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusToken(String);

impl StatusToken {
    /// Extracts the token from a response body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the body is empty, or is a JSON object
    /// without a `status` string.
    pub fn parse(body: &str) -> Result<Self, ParseError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ParseError::UnexpectedFormat("empty body".to_string()));
        }

        if body.starts_with('{') {
            let wrapped: WrappedStatus = serde_json::from_str(body)?;
            return Ok(Self(wrapped.status.trim().to_string()));
        }

        Ok(Self(body.to_string()))
    }

    /// Returns whether the device accepted the command.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.0.eq_ignore_ascii_case(STATUS_OK)
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wi-Fi connection state from `wlanGetConnectState`.
///
/// Tokens not listed here are kept verbatim in [`ConnectionStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    /// Connection in progress.
    InProgress,
    /// Wrong password.
    PairFailed,
    /// Connection failed.
    Failed,
    /// Connected.
    Connected,
    /// A token this library does not know.
    Other(String),
}

impl ConnectionStatus {
    /// Returns the token used by the device.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "PROCESS",
            Self::PairFailed => "PAIRFAIL",
            Self::Failed => "FAIL",
            Self::Connected => "OK",
            Self::Other(token) => token,
        }
    }
}

impl From<&str> for ConnectionStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "PROCESS" => Self::InProgress,
            "PAIRFAIL" => Self::PairFailed,
            "FAIL" => Self::Failed,
            "OK" => Self::Connected,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Response from `EQGetStat`.
#[derive(Debug, Clone, Deserialize)]
pub struct EqStatus {
    /// `On` or `Off`.
    #[serde(rename = "EQStat")]
    pub eq_stat: String,
}

impl EqStatus {
    /// Returns whether the equalizer is enabled.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidValue` for anything but `On`/`Off`.
    pub fn is_enabled(&self) -> Result<bool, ParseError> {
        match self.eq_stat.trim() {
            s if s.eq_ignore_ascii_case("on") => Ok(true),
            s if s.eq_ignore_ascii_case("off") => Ok(false),
            other => Err(ParseError::InvalidValue {
                field: "EQStat".to_string(),
                message: format!("expected On or Off, got {other:?}"),
            }),
        }
    }
}

/// Parses a bare integer body such as the `getShutdown` reply.
///
/// # Errors
///
/// Returns `ParseError::InvalidValue` if the body is not an integer.
pub fn parse_integer(field: &str, body: &str) -> Result<i64, ParseError> {
    body.trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| ParseError::InvalidValue {
            field: field.to_string(),
            message: format!("{e}: {body:?}"),
        })
}
