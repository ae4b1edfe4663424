// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `wiim_lib` library.
//!
//! Every command surfaces exactly one of four failure kinds:
//!
//! - [`Error::Unreachable`]: the device could not be reached (network error,
//!   timeout, or the client was closed)
//! - [`Error::Communication`]: the device answered with a non-success HTTP status
//! - [`Error::Response`]: the body could not be decoded into the expected shape
//! - [`Error::Command`]: the device explicitly rejected the command
//!
//! [`Error::Value`] is reserved for arguments rejected before any request is
//! built, such as an out-of-range [`Volume`](crate::types::Volume).

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was rejected before anything was sent.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The device could not be reached.
    #[error("device unreachable: {0}")]
    Unreachable(#[from] ConnectionError),

    /// The device answered with a non-success HTTP status.
    #[error("device returned HTTP {status} for `{command}`")]
    Communication {
        /// HTTP status code returned by the device.
        status: u16,
        /// The command that was sent.
        command: String,
    },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Response(#[from] ParseError),

    /// The device rejected the command.
    #[error("device rejected `{command}`: {reply}")]
    Command {
        /// The command that was sent.
        command: String,
        /// The status token the device replied with.
        reply: String,
    },
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: i32,
        /// Maximum allowed value.
        max: i32,
        /// The actual value that was provided.
        actual: i32,
    },

    /// An unknown loop mode code was provided.
    #[error("invalid loop mode: {0}")]
    InvalidLoopMode(String),
}

/// Errors raised while talking to the device over the network.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// HTTP request failed before a status was received.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The client was closed and its session released.
    #[error("client is closed")]
    Closed,

    /// The HTTP session could not be created.
    #[error("failed to create HTTP session: {0}")]
    Setup(#[source] reqwest::Error),
}

/// Errors related to parsing device responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// Unexpected response format.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// Failed to parse a specific value.
    #[error("failed to parse {field}: {message}")]
    InvalidValue {
        /// The field that failed to parse.
        field: String,
        /// Description of the parsing failure.
        message: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
