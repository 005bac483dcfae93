// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `HueBridge` library.
//!
//! Failures fall into four groups: argument validation (raised before any
//! request is sent), transport failures, malformed responses, and errors the
//! bridge itself reports inside an otherwise successful response.

use thiserror::Error;

use crate::response::BridgeError;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument was rejected before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The HTTP exchange with the bridge failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The response body could not be interpreted.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// The bridge answered with an error entry.
    #[error("bridge error: {0}")]
    Bridge(#[from] BridgeError),
}

/// Errors raised while checking caller-supplied arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required argument was empty or blank.
    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),

    /// A transition time was given without asking the bridge to capture the
    /// current light state.
    #[error("transition time requires store_light_state to be set")]
    TransitionWithoutCapture,

    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u64,
        /// Maximum allowed value.
        max: u64,
        /// The actual value that was provided.
        actual: u64,
    },

    /// The application key cannot be used as a URL path segment.
    #[error("invalid application key: {0}")]
    InvalidAppKey(String),
}

/// Errors related to the HTTP exchange with the bridge.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status code.
    #[error("HTTP {status} - {reason}")]
    HttpStatus {
        /// The numeric status code.
        status: u16,
        /// The canonical reason phrase, if known.
        reason: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// Errors related to parsing bridge responses.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Expected field is missing from the response.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// The top-level JSON value has the wrong shape.
    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    /// An envelope entry is neither a success nor an error.
    #[error("malformed response entry at index {index}: {entry}")]
    MalformedResponse {
        /// Position of the entry within the envelope.
        index: usize,
        /// The offending entry, re-serialized.
        entry: String,
    },
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;
