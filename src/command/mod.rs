// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Outgoing request bodies.
//!
//! Each command is a plain struct whose optional slots are only serialized
//! when set. `false` and `0` are values like any other and are sent; only
//! unset slots are left out.
//!
//! # Available Commands
//!
//! | Command Type | Endpoint | Purpose |
//! |-------------|----------|---------|
//! | [`LightCommand`] | `lights/{id}/state`, `groups/{id}/action`, scene light states | Light state change |
//! | [`SceneCommand`] | `groups/{id}/action` | Recall a scene |
//! | [`SceneUpdate`] | `scenes/{id}` | Partial scene update |
//! | [`Scene`](crate::types::Scene) | `scenes`, `scenes/{id}` | Create or replace a scene |
//!
//! # Examples
//!
//! ```
//! use huebridge_lib::command::{Command, LightCommand};
//!
//! let cmd = LightCommand::new().turn_on().with_brightness(200);
//! assert_eq!(cmd.to_json().unwrap(), r#"{"on":true,"bri":200}"#);
//! ```

mod light;
mod scene;

pub use light::{Alert, Effect, LightCommand};
pub use scene::{SceneCommand, SceneUpdate};

use serde::Serialize;

use crate::error::ParseError;
use crate::types::Scene;

/// A request body that can be sent to the bridge.
pub trait Command: Serialize {
    /// Serializes the command to the bridge's JSON dialect.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if serialization fails.
    fn to_json(&self) -> Result<String, ParseError> {
        serde_json::to_string(self).map_err(Into::into)
    }
}

impl Command for Scene {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_serializes_as_command() {
        let scene = Scene::new("Evening", ["1", "2"]).with_recycle(false);
        assert_eq!(
            scene.to_json().unwrap(),
            r#"{"name":"Evening","lights":["1","2"],"recycle":false}"#
        );
    }

    #[test]
    fn empty_command_is_empty_object() {
        assert_eq!(LightCommand::new().to_json().unwrap(), "{}");
    }
}
