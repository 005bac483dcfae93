// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! High-level client for a Hue bridge.
//!
//! A bridge handle exists in two states:
//!
//! - [`BridgeBuilder`]: an address without an application key. It only
//!   carries connection settings.
//! - [`Bridge`]: an authenticated handle. All resource operations live here.
//!
//! ```no_run
//! use huebridge_lib::Bridge;
//! use huebridge_lib::types::Scene;
//!
//! # async fn example() -> huebridge_lib::Result<()> {
//! let bridge = Bridge::http("192.168.1.2").authenticate("1028d66426293e821ecfd9ef1a0731df")?;
//!
//! let id = bridge.create_scene(&Scene::new("Evening", ["1", "2"])).await?;
//! bridge.recall_scene_all(&id).await?;
//! # Ok(())
//! # }
//! ```

mod http_builder;

pub use http_builder::BridgeBuilder;

use crate::command::{Command, LightCommand, SceneCommand, SceneUpdate};
use crate::error::{Error, ParseError, ValidationError};
use crate::protocol::{BridgeConfig, HttpClient, Method, Transport};
use crate::response::{ResultEnvelope, parse_collection, parse_envelope, parse_single};
use crate::types::{Entity, Scene};

/// Group ID addressing every light known to the bridge.
pub const ALL_LIGHTS_GROUP: &str = "0";

/// An authenticated Hue bridge.
///
/// Each method performs exactly one HTTP request. Arguments are validated
/// before anything is sent.
///
/// # Type Parameter
///
/// `T` is the transport. [`HttpClient`] is used for real bridges; any other
/// [`Transport`] passed to [`Bridge::with_transport`] is responsible for
/// addressing the authenticated API base itself.
#[derive(Debug, Clone)]
pub struct Bridge<T: Transport = HttpClient> {
    transport: T,
}

impl Bridge<HttpClient> {
    /// Creates an unauthenticated builder from a host string.
    ///
    /// Equivalent to `Bridge::http_config(BridgeConfig::new(host))`.
    #[must_use]
    pub fn http(host: impl Into<String>) -> BridgeBuilder {
        BridgeBuilder::new(BridgeConfig::new(host))
    }

    /// Creates an unauthenticated builder from a [`BridgeConfig`].
    #[must_use]
    pub fn http_config(config: BridgeConfig) -> BridgeBuilder {
        BridgeBuilder::new(config)
    }
}

impl<T: Transport> Bridge<T> {
    /// Wraps an already authenticated transport.
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ========== Scenes ==========

    /// Lists every scene stored on the bridge.
    ///
    /// A response that is not an ID-keyed object is treated as "no scenes",
    /// unless it is an envelope carrying a bridge error.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the bridge reports an error, or
    /// the body cannot be parsed.
    pub async fn get_scenes(&self) -> Result<Vec<Scene>, Error> {
        let body = self.transport.request(Method::Get, "scenes", None).await?;

        if let Ok(envelope) = parse_envelope(&body)
            && let Some(err) = envelope.first_error()
        {
            return Err(err.clone().into());
        }

        Ok(parse_collection(&body)?)
    }

    /// Reads one scene.
    ///
    /// The returned scene's ID is `id` unless the body carries its own.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID, `Error::Bridge` if the
    /// scene does not exist, or a transport/parse error.
    pub async fn get_scene(&self, id: &str) -> Result<Scene, Error> {
        let id = require("id", id)?;
        let body = self
            .transport
            .request(Method::Get, &scene_path(id), None)
            .await?;
        parse_single(&body, id)
    }

    /// Creates a scene and returns the ID assigned by the bridge.
    ///
    /// Non-updatable fields are dropped from the payload, except `recycle`,
    /// which is kept if set and sent as `false` otherwise: the bridge rejects
    /// a creation request without it.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the name is blank or no lights are given
    /// - `Error::Bridge` with the first reported error if no ID came back
    /// - `ParseError::MissingField` if the response has neither an ID nor an
    ///   error
    pub async fn create_scene(&self, scene: &Scene) -> Result<String, Error> {
        require("name", scene.name.as_deref().unwrap_or_default())?;
        if scene.lights.as_ref().is_none_or(Vec::is_empty) {
            return Err(ValidationError::EmptyArgument("lights").into());
        }

        let mut payload = scene.strip_non_updatable();
        payload.recycle = Some(scene.recycle.unwrap_or(false));

        let envelope = self.send(Method::Post, "scenes", Some(&payload)).await?;

        if let Some(id) = envelope.created_id() {
            tracing::debug!(id, "Scene created");
            return Ok(id.to_string());
        }

        if let Some(err) = envelope.first_error() {
            tracing::warn!(error = %err, "Scene creation rejected by bridge");
            return Err(err.clone().into());
        }

        Err(ParseError::MissingField("id".to_string()).into())
    }

    /// Partially updates a scene: name, lights, and optionally stores the
    /// lights' current state.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID or an invalid update (see
    /// [`SceneUpdate::validate`]), or a transport/parse error. Bridge errors
    /// are returned inside the envelope.
    pub async fn update_scene(
        &self,
        id: &str,
        update: &SceneUpdate,
    ) -> Result<ResultEnvelope, Error> {
        let id = require("id", id)?;
        update.validate()?;
        self.send(Method::Put, &scene_path(id), Some(update)).await
    }

    /// Replaces a scene with the given body, minus its non-updatable fields.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID, or a transport/parse error.
    /// Bridge errors are returned inside the envelope.
    pub async fn replace_scene(
        &self,
        id: &str,
        scene: &Scene,
    ) -> Result<ResultEnvelope, Error> {
        let id = require("id", id)?;
        let payload = scene.strip_non_updatable();
        self.send(Method::Put, &scene_path(id), Some(&payload)).await
    }

    /// Changes the stored state of one light within a scene.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID or an empty command, or a
    /// transport/parse error. Bridge errors are returned inside the envelope.
    pub async fn modify_scene_light_state(
        &self,
        scene_id: &str,
        light_id: &str,
        command: &LightCommand,
    ) -> Result<ResultEnvelope, Error> {
        let scene_id = require("scene_id", scene_id)?;
        let light_id = require("light_id", light_id)?;
        if command.is_empty() {
            return Err(ValidationError::EmptyArgument("command").into());
        }

        let path = format!(
            "{}/lights/{}/lightstate",
            scene_path(scene_id),
            urlencoding::encode(light_id)
        );
        self.send(Method::Put, &path, Some(command)).await
    }

    /// Recalls a scene on the lights of a group.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID, or a transport/parse error.
    /// Bridge errors are returned inside the envelope.
    pub async fn recall_scene(
        &self,
        scene_id: &str,
        group_id: &str,
    ) -> Result<ResultEnvelope, Error> {
        let scene_id = require("scene_id", scene_id)?;
        self.send_group_command(&SceneCommand::new(scene_id), group_id)
            .await
    }

    /// Recalls a scene on every light (group `0`).
    ///
    /// # Errors
    ///
    /// See [`recall_scene`](Self::recall_scene).
    pub async fn recall_scene_all(&self, scene_id: &str) -> Result<ResultEnvelope, Error> {
        self.recall_scene(scene_id, ALL_LIGHTS_GROUP).await
    }

    /// Deletes a scene.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank ID, or a transport/parse error.
    /// Bridge errors are returned inside the envelope.
    pub async fn delete_scene(&self, id: &str) -> Result<ResultEnvelope, Error> {
        let id = require("id", id)?;
        let body = self
            .transport
            .request(Method::Delete, &scene_path(id), None)
            .await?;
        Ok(parse_envelope(&body)?)
    }

    // ========== Groups ==========

    /// Sends a command to a group's action endpoint.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a blank group ID, or a transport/parse
    /// error. Bridge errors are returned inside the envelope.
    pub async fn send_group_command<C: Command>(
        &self,
        command: &C,
        group_id: &str,
    ) -> Result<ResultEnvelope, Error> {
        let group_id = require("group_id", group_id)?;
        let path = format!("groups/{}/action", urlencoding::encode(group_id));
        self.send(Method::Put, &path, Some(command)).await
    }

    async fn send<C: Command>(
        &self,
        method: Method,
        path: &str,
        command: Option<&C>,
    ) -> Result<ResultEnvelope, Error> {
        let body = command.map(Command::to_json).transpose()?;
        let raw = self.transport.request(method, path, body).await?;
        Ok(parse_envelope(&raw)?)
    }
}

fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyArgument(name))
    } else {
        Ok(value)
    }
}

fn scene_path(id: &str) -> String {
    format!("scenes/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_rejects_blank() {
        assert_eq!(require("id", ""), Err(ValidationError::EmptyArgument("id")));
        assert_eq!(require("id", " \t"), Err(ValidationError::EmptyArgument("id")));
        assert_eq!(require("id", "ab34"), Ok("ab34"));
    }

    #[test]
    fn scene_path_encodes_id() {
        assert_eq!(scene_path("ab34"), "scenes/ab34");
        assert_eq!(scene_path("a b/c"), "scenes/a%20b%2Fc");
    }

    #[test]
    fn http_builder_from_host() {
        let builder = Bridge::http("192.168.1.2");
        assert_eq!(builder.config().host(), "192.168.1.2");
    }
}
