// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Hue bridge REST API.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;

use crate::error::{Error, ProtocolError, ValidationError};
use crate::protocol::{Method, Transport};

// ============================================================================
// BridgeConfig - Connection parameters (no credentials)
// ============================================================================

/// Where and how to reach a Hue bridge on the local network.
///
/// The configuration carries no application key. A key is supplied when the
/// configuration is turned into a client, see [`BridgeConfig::into_client`].
///
/// # Examples
///
/// ```
/// use huebridge_lib::protocol::BridgeConfig;
/// use std::time::Duration;
///
/// let config = BridgeConfig::new("192.168.1.2")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
///
/// assert_eq!(config.base_url(), "http://192.168.1.2:8080");
/// ```
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    host: String,
    port: u16,
    use_https: bool,
    timeout: Duration,
}

impl BridgeConfig {
    /// Port the bridge serves its plain HTTP API on.
    pub const DEFAULT_PORT: u16 = 80;
    /// Port the bridge serves its TLS API on.
    pub const DEFAULT_HTTPS_PORT: u16 = 443;
    /// How long a single bridge request may take.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Targets the bridge at `host`, as found by discovery or in the Hue app.
    ///
    /// `host` is a hostname or IP address.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            use_https: false,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Overrides the port, for bridges behind a proxy or an emulator.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Talks to the bridge over TLS.
    ///
    /// A port still at 80 moves to 443; an overridden port is left alone.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.use_https = true;
        if self.port == Self::DEFAULT_PORT {
            self.port = Self::DEFAULT_HTTPS_PORT;
        }
        self
    }

    /// Bounds each bridge request, connection included.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Bridge hostname or IP address.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Port requests are sent to.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether requests go over TLS.
    #[must_use]
    pub fn use_https(&self) -> bool {
        self.use_https
    }

    /// Per-request time limit.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Scheme, host and port of the bridge, without the `/api` prefix.
    ///
    /// Standard ports are omitted.
    #[must_use]
    pub fn base_url(&self) -> String {
        let scheme = if self.use_https { "https" } else { "http" };
        let port_suffix =
            if (self.use_https && self.port == 443) || (!self.use_https && self.port == 80) {
                String::new()
            } else {
                format!(":{}", self.port)
            };
        format!("{scheme}://{}{port_suffix}", self.host)
    }

    /// Creates an `HttpClient` bound to the given application key.
    ///
    /// The key becomes a path segment of every request, so it must be
    /// non-blank and free of whitespace and `/`.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyArgument` if the key is blank
    /// - `ValidationError::InvalidAppKey` if the key contains whitespace or `/`
    /// - `ProtocolError::InvalidAddress` if the host is empty
    /// - `ProtocolError::Http` if the HTTP client cannot be created
    pub fn into_client(self, app_key: &str) -> Result<HttpClient, Error> {
        if app_key.trim().is_empty() {
            return Err(ValidationError::EmptyArgument("app_key").into());
        }
        if app_key.chars().any(|c| c.is_whitespace() || c == '/') {
            return Err(ValidationError::InvalidAppKey(app_key.to_string()).into());
        }
        if self.host.trim().is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()).into());
        }

        let api_base = format!("{}/api/{app_key}/", self.base_url());

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;

        Ok(HttpClient { api_base, client })
    }
}

// ============================================================================
// HttpClient - reqwest-backed Transport
// ============================================================================

/// HTTP client for an authenticated Hue bridge API base.
///
/// Every request targets `{scheme}://{host}/api/{key}/{path}`.
#[derive(Debug, Clone)]
pub struct HttpClient {
    api_base: String,
    client: Client,
}

impl HttpClient {
    /// Returns the API base URL, always ending with `/`.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Builds the URL for a resource path.
    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Transport for HttpClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ProtocolError> {
        let url = self.build_url(path);

        tracing::debug!(%method, url = %url, "Sending bridge request");

        let mut request = self.client.request(method.into(), &url);
        if let Some(body) = body {
            tracing::trace!(body = %body, "Request body");
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = request.send().await.map_err(ProtocolError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtocolError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await.map_err(ProtocolError::Http)?;

        tracing::debug!(body = %body, "Received bridge response");

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = BridgeConfig::new("192.168.1.2");
        assert_eq!(config.host(), "192.168.1.2");
        assert_eq!(config.port(), 80);
        assert!(!config.use_https());
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn config_with_https() {
        let config = BridgeConfig::new("192.168.1.2").with_https();
        assert!(config.use_https());
        assert_eq!(config.port(), 443);
        assert_eq!(config.base_url(), "https://192.168.1.2");
    }

    #[test]
    fn config_with_https_custom_port() {
        let config = BridgeConfig::new("192.168.1.2")
            .with_port(8443)
            .with_https();
        assert_eq!(config.port(), 8443);
        assert_eq!(config.base_url(), "https://192.168.1.2:8443");
    }

    #[test]
    fn config_base_url_custom_port() {
        let config = BridgeConfig::new("192.168.1.2").with_port(8080);
        assert_eq!(config.base_url(), "http://192.168.1.2:8080");
    }

    #[test]
    fn into_client_builds_api_base() {
        let client = BridgeConfig::new("192.168.1.2")
            .into_client("newdeveloper")
            .unwrap();
        assert_eq!(client.api_base(), "http://192.168.1.2/api/newdeveloper/");
    }

    #[test]
    fn into_client_rejects_empty_host() {
        let result = BridgeConfig::new("  ").into_client("newdeveloper");
        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::InvalidAddress(_)))
        ));
    }

    #[test]
    fn into_client_rejects_blank_key() {
        for key in ["", "   "] {
            let result = BridgeConfig::new("192.168.1.2").into_client(key);
            assert!(matches!(
                result,
                Err(Error::Validation(ValidationError::EmptyArgument("app_key")))
            ));
        }
    }

    #[test]
    fn into_client_rejects_key_that_breaks_the_path() {
        for key in ["a b", "a/c", "key\n"] {
            let result = BridgeConfig::new("192.168.1.2").into_client(key);
            assert!(
                matches!(
                    result,
                    Err(Error::Validation(ValidationError::InvalidAppKey(_)))
                ),
                "key {key:?} was accepted"
            );
        }
    }

    #[test]
    fn build_url_joins_resource_path() {
        let client = BridgeConfig::new("192.168.1.2")
            .into_client("key")
            .unwrap();
        assert_eq!(
            client.build_url("scenes/1"),
            "http://192.168.1.2/api/key/scenes/1"
        );
        assert_eq!(
            client.build_url("/scenes"),
            "http://192.168.1.2/api/key/scenes"
        );
    }
}
