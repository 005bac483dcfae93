// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Errors reported by the bridge inside a response envelope.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error entry returned by the bridge.
///
/// The bridge reports application errors as
/// `{"error": {"type": 3, "address": "/scenes/x", "description": "..."}}`
/// inside a `200 OK` response.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{description} (type {error_type}, address {address})")]
pub struct BridgeError {
    /// Numeric error code.
    #[serde(rename = "type")]
    pub error_type: u32,
    /// Resource path the error refers to.
    #[serde(default)]
    pub address: String,
    /// Human readable description.
    pub description: String,
}

impl BridgeError {
    /// Classifies the numeric error code.
    #[must_use]
    pub fn kind(&self) -> BridgeErrorKind {
        BridgeErrorKind::from(self.error_type)
    }
}

/// Known bridge error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BridgeErrorKind {
    /// 1: the application key is not whitelisted.
    UnauthorizedUser,
    /// 2: the request body is not valid JSON.
    InvalidJson,
    /// 3: the addressed resource does not exist.
    ResourceNotAvailable,
    /// 4: the HTTP method is not supported for this resource.
    MethodNotAvailable,
    /// 5: a required parameter is missing.
    MissingParameters,
    /// 6: a parameter is not available for this resource.
    ParameterNotAvailable,
    /// 7: a parameter value is invalid.
    InvalidValue,
    /// 8: the parameter cannot be modified.
    ParameterNotModifiable,
    /// 11: too many items in a list.
    TooManyItems,
    /// 101: the link button has not been pressed.
    LinkButtonNotPressed,
    /// 201: the device is off and cannot accept state changes.
    DeviceOff,
    /// 301: the group table is full.
    GroupTableFull,
    /// 302: a device's group table is full.
    DeviceGroupTableFull,
    /// 402: the scene could not be created.
    SceneCreationFailed,
    /// 403: the scene buffer in the bridge is full.
    SceneBufferFull,
    /// Any other code.
    Other(u32),
}

impl From<u32> for BridgeErrorKind {
    fn from(code: u32) -> Self {
        match code {
            1 => Self::UnauthorizedUser,
            2 => Self::InvalidJson,
            3 => Self::ResourceNotAvailable,
            4 => Self::MethodNotAvailable,
            5 => Self::MissingParameters,
            6 => Self::ParameterNotAvailable,
            7 => Self::InvalidValue,
            8 => Self::ParameterNotModifiable,
            11 => Self::TooManyItems,
            101 => Self::LinkButtonNotPressed,
            201 => Self::DeviceOff,
            301 => Self::GroupTableFull,
            302 => Self::DeviceGroupTableFull,
            402 => Self::SceneCreationFailed,
            403 => Self::SceneBufferFull,
            other => Self::Other(other),
        }
    }
}
