// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Unauthenticated bridge handle.

use std::time::Duration;

use crate::bridge::Bridge;
use crate::error::Error;
use crate::protocol::{BridgeConfig, HttpClient};

/// A bridge address without an application key.
///
/// No resource operation is available until a key is supplied with
/// [`authenticate`](Self::authenticate), which yields a [`Bridge`].
///
/// # Examples
///
/// ```
/// use huebridge_lib::Bridge;
///
/// # fn example() -> huebridge_lib::Result<()> {
/// let bridge = Bridge::http("192.168.1.2")
///     .with_port(8080)
///     .authenticate("1028d66426293e821ecfd9ef1a0731df")?;
///
/// assert_eq!(
///     bridge.transport().api_base(),
///     "http://192.168.1.2:8080/api/1028d66426293e821ecfd9ef1a0731df/"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BridgeBuilder {
    config: BridgeConfig,
}

impl BridgeBuilder {
    /// Creates a new builder with the specified configuration.
    pub(crate) fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.config = self.config.with_port(port);
        self
    }

    /// Enables HTTPS.
    #[must_use]
    pub fn with_https(mut self) -> Self {
        self.config = self.config.with_https();
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.with_timeout(timeout);
        self
    }

    /// Returns the connection configuration.
    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Supplies the application key and returns an authenticated bridge.
    ///
    /// No request is made; a key the bridge does not know shows up as an
    /// "unauthorized user" error on the first call.
    ///
    /// # Errors
    ///
    /// - `ValidationError::EmptyArgument` if the key is blank
    /// - `ValidationError::InvalidAppKey` if the key contains whitespace or `/`
    /// - `ProtocolError` if the HTTP client cannot be created
    pub fn authenticate(self, app_key: impl AsRef<str>) -> Result<Bridge<HttpClient>, Error> {
        let client = self.config.into_client(app_key.as_ref())?;
        Ok(Bridge::with_transport(client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn builder_forwards_config() {
        let builder = BridgeBuilder::new(BridgeConfig::new("192.168.1.2"))
            .with_https()
            .with_timeout(Duration::from_secs(3));
        assert!(builder.config().use_https());
        assert_eq!(builder.config().port(), 443);
        assert_eq!(builder.config().timeout(), Duration::from_secs(3));
    }

    #[test]
    fn authenticate_builds_api_base() {
        let bridge = BridgeBuilder::new(BridgeConfig::new("192.168.1.2"))
            .authenticate("newdeveloper")
            .unwrap();
        assert_eq!(
            bridge.transport().api_base(),
            "http://192.168.1.2/api/newdeveloper/"
        );
    }

    #[test]
    fn authenticate_rejects_blank_key() {
        let result = BridgeBuilder::new(BridgeConfig::new("192.168.1.2")).authenticate(" ");
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::EmptyArgument("app_key")))
        ));
    }

    #[test]
    fn authenticate_rejects_key_with_slash() {
        let result =
            BridgeBuilder::new(BridgeConfig::new("192.168.1.2")).authenticate("abc/def");
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidAppKey(_)))
        ));
    }
}
