// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transport layer for talking to a Hue bridge.
//!
//! The bridge exposes a plain REST surface: every operation is one HTTP
//! request with an optional JSON body, answered by a JSON body. Application
//! errors are reported inside `200 OK` responses, so the transport hands the
//! raw text back and leaves interpretation to [`crate::response`].
//!
//! - [`HttpClient`]: `reqwest`-based implementation of [`Transport`]
//! - [`BridgeConfig`]: connection parameters used to build an [`HttpClient`]

mod http;

pub use http::{BridgeConfig, HttpClient};

use std::fmt;

use crate::error::ProtocolError;

/// HTTP verbs used by the bridge API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or collection.
    Get,
    /// Create a resource.
    Post,
    /// Update a resource.
    Put,
    /// Delete a resource.
    Delete,
}

impl Method {
    /// Returns the verb as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// Trait for transports that can carry one request to the bridge.
///
/// `path` is relative to the authenticated API base, for example `scenes`
/// or `groups/0/action`.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Sends a request and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns `ProtocolError` if the request cannot be sent, or if the bridge
    /// answers with a non-success status code.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<String, ProtocolError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_wire_names() {
        assert_eq!(Method::Get.to_string(), "GET");
        assert_eq!(Method::Post.to_string(), "POST");
        assert_eq!(Method::Put.to_string(), "PUT");
        assert_eq!(Method::Delete.to_string(), "DELETE");
    }

    #[test]
    fn method_into_reqwest() {
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(
            reqwest::Method::from(Method::Delete),
            reqwest::Method::DELETE
        );
    }
}
