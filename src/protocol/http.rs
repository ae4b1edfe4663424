// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP protocol implementation for WiiM / `LinkPlay` devices.

use std::time::Duration;

use parking_lot::Mutex;
use reqwest::Client;

use crate::command::Command;
use crate::error::{ConnectionError, Error};
use crate::protocol::CommandResponse;

/// Path and query prefix of the device command endpoint.
pub const API_PATH: &str = "/httpapi.asp?command=";

// ============================================================================
// HttpConfig - Connection parameters
// ============================================================================

/// Configuration for a device connection.
///
/// # Examples
///
/// ```
/// use wiim_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.42").with_timeout(Duration::from_secs(3));
/// assert_eq!(config.base_url(), "https://192.168.1.42");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    timeout: Duration,
    session: Option<Client>,
}

impl HttpConfig {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Creates a new configuration for the specified host.
    ///
    /// # Arguments
    ///
    /// * `host` - Hostname or IP address, optionally with a port. A leading
    ///   `http://` or `https://` is kept as given; otherwise `https://` is used.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            session: None,
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a caller-owned HTTP session instead of creating one.
    ///
    /// The caller is responsible for configuring the session to accept the
    /// device certificate.
    #[must_use]
    pub fn with_session(mut self, session: Client) -> Self {
        self.session = Some(session);
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether a caller-owned session was supplied.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("https://{host}")
        }
    }

    /// Creates the session owned by a client.
    ///
    /// Device firmware serves a self-signed certificate, so this is the one
    /// place where certificate verification is turned off.
    fn build_session(&self) -> Result<Client, ConnectionError> {
        Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(true)
            .build()
            .map_err(ConnectionError::Setup)
    }

    /// Creates an `HttpClient` from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if no session was supplied and one cannot be created.
    pub fn into_client(mut self) -> Result<HttpClient, ConnectionError> {
        let base_url = self.base_url();
        let timeout = self.timeout;

        let (session, owns_session) = match self.session.take() {
            Some(session) => (session, false),
            None => (self.build_session()?, true),
        };

        Ok(HttpClient {
            base_url,
            timeout,
            session: Mutex::new(Some(session)),
            owns_session,
        })
    }
}

// ============================================================================
// HttpClient - Request execution
// ============================================================================

/// HTTP client for communicating with a device.
///
/// Sends commands to `https://<host>/httpapi.asp?command=<command>`. The
/// session is either created by the client (and released by [`close`]) or
/// supplied by the caller (and never released by the client).
///
/// [`close`]: HttpClient::close
#[derive(Debug)]
pub struct HttpClient {
    base_url: String,
    timeout: Duration,
    session: Mutex<Option<Client>>,
    owns_session: bool,
}

impl HttpClient {
    /// Creates a client for the specified host with its own session.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP session cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ConnectionError> {
        HttpConfig::new(host).into_client()
    }

    /// Creates a client for the specified host on a caller-owned session.
    #[must_use]
    pub fn with_session(host: impl Into<String>, session: Client) -> Self {
        let config = HttpConfig::new(host);
        Self {
            base_url: config.base_url(),
            timeout: config.timeout(),
            session: Mutex::new(Some(session)),
            owns_session: false,
        }
    }

    /// Returns the base URL of the device.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether this client created, and therefore owns, its session.
    #[must_use]
    pub fn owns_session(&self) -> bool {
        self.owns_session
    }

    /// Returns whether [`close`](Self::close) has been called.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.session.lock().is_none()
    }

    /// Builds the URL for a command.
    #[must_use]
    pub fn build_url(&self, command: &Command) -> String {
        format!("{}{API_PATH}{}", self.base_url, command.to_query_value())
    }

    /// Sends a command and returns the raw response body.
    ///
    /// # Errors
    ///
    /// - [`Error::Unreachable`] if the client is closed, the connection
    ///   fails, or the request times out
    /// - [`Error::Communication`] if the device answers with a non-success
    ///   HTTP status
    pub async fn send(&self, command: &Command) -> Result<CommandResponse, Error> {
        let session = self.session()?;
        let url = self.build_url(command);

        tracing::debug!(url = %url, "Sending HTTP command");

        let response = session
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.connection_error(e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                command = %command.to_http_command(),
                "Device returned error status"
            );
            return Err(Error::Communication {
                status: status.as_u16(),
                command: command.to_http_command(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.connection_error(e))?;

        tracing::debug!(body = %body, "Received HTTP response");

        Ok(CommandResponse::new(body))
    }

    /// Releases the session if this client created it.
    ///
    /// Returns `true` only when an owned session was released by this call.
    /// A caller-supplied session is left untouched. Either way the client is
    /// closed afterwards and further commands fail with
    /// [`ConnectionError::Closed`].
    pub fn close(&self) -> bool {
        let released = self.session.lock().take();

        match released {
            Some(session) if self.owns_session => {
                drop(session);
                tracing::debug!(base_url = %self.base_url, "Released owned HTTP session");
                true
            }
            _ => false,
        }
    }

    // The lock is only held to clone the handle, never across an await.
    fn session(&self) -> Result<Client, ConnectionError> {
        self.session.lock().clone().ok_or(ConnectionError::Closed)
    }

    fn connection_error(&self, error: reqwest::Error) -> ConnectionError {
        if error.is_timeout() {
            ConnectionError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
        } else {
            ConnectionError::Http(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Volume;

    #[test]
    fn base_url_defaults_to_https() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.base_url(), "https://192.168.1.42");
    }

    #[test]
    fn base_url_keeps_explicit_scheme() {
        assert_eq!(
            HttpConfig::new("http://127.0.0.1:8080/").base_url(),
            "http://127.0.0.1:8080"
        );
        assert_eq!(
            HttpConfig::new("https://wiim.local").base_url(),
            "https://wiim.local"
        );
    }

    #[test]
    fn config_default_values() {
        let config = HttpConfig::new("192.168.1.42");
        assert_eq!(config.host(), "192.168.1.42");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.has_session());
    }

    #[test]
    fn config_with_timeout() {
        let config = HttpConfig::new("192.168.1.42").with_timeout(Duration::from_secs(2));
        assert_eq!(config.timeout(), Duration::from_secs(2));
    }

    #[test]
    fn build_url_without_argument() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        assert_eq!(
            client.build_url(&Command::GetPlayerStatus),
            "https://192.168.1.42/httpapi.asp?command=getPlayerStatus"
        );
    }

    #[test]
    fn build_url_with_argument() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        let cmd = Command::SetVolume(Volume::new(40).unwrap());
        assert_eq!(
            client.build_url(&cmd),
            "https://192.168.1.42/httpapi.asp?command=setPlayerCmd:vol:40"
        );
    }

    #[test]
    fn owned_session_is_released_once() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        assert!(client.owns_session());
        assert!(!client.is_closed());

        assert!(client.close());
        assert!(client.is_closed());
        assert!(!client.close());
    }

    #[test]
    fn shared_session_is_never_released() {
        let session = Client::new();
        let client = HttpClient::with_session("192.168.1.42", session.clone());
        assert!(!client.owns_session());

        assert!(!client.close());
        assert!(client.is_closed());
        assert!(!client.close());
    }

    #[test]
    fn config_with_session_is_not_owned() {
        let client = HttpConfig::new("192.168.1.42")
            .with_session(Client::new())
            .into_client()
            .unwrap();
        assert!(!client.owns_session());
    }

    #[tokio::test]
    async fn send_after_close_is_unreachable() {
        let client = HttpClient::new("192.168.1.42").unwrap();
        client.close();

        let result = client.send(&Command::Play).await;
        assert!(matches!(
            result,
            Err(Error::Unreachable(ConnectionError::Closed))
        ));
    }
}
