// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene commands: recall through a group, and partial scene updates.

use std::time::Duration;

use serde::Serialize;

use crate::command::Command;
use crate::error::ValidationError;
use crate::types::TransitionTime;

/// Recalls a scene when sent to a group's action endpoint.
///
/// # Examples
///
/// ```
/// use huebridge_lib::command::{Command, SceneCommand};
///
/// let cmd = SceneCommand::new("ab34");
/// assert_eq!(cmd.to_json().unwrap(), r#"{"scene":"ab34"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SceneCommand {
    scene: String,
}

impl SceneCommand {
    /// Creates a recall command for the given scene ID.
    #[must_use]
    pub fn new(scene_id: impl Into<String>) -> Self {
        Self {
            scene: scene_id.into(),
        }
    }

    /// Returns the scene ID.
    #[must_use]
    pub fn scene_id(&self) -> &str {
        &self.scene
    }
}

impl Command for SceneCommand {}

/// Partial update of a stored scene.
///
/// A transition time is only meaningful together with `store_light_state`
/// set to `true`: the bridge then stores the lights' current state with that
/// transition. [`SceneUpdate::validate`] rejects any other combination.
///
/// # Examples
///
/// ```
/// use huebridge_lib::command::{Command, SceneUpdate};
/// use std::time::Duration;
///
/// let update = SceneUpdate::new()
///     .with_lights(["1", "2"])
///     .with_store_light_state(true)
///     .with_transition(Duration::from_secs(3))
///     .unwrap();
///
/// assert!(update.validate().is_ok());
/// assert_eq!(
///     update.to_json().unwrap(),
///     r#"{"lights":["1","2"],"storelightstate":true,"transitiontime":30}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lights: Option<Vec<String>>,
    #[serde(rename = "storelightstate", skip_serializing_if = "Option::is_none")]
    store_light_state: Option<bool>,
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    transition_time: Option<TransitionTime>,
}

impl SceneUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renames the scene.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the scene's light list.
    #[must_use]
    pub fn with_lights<I, S>(mut self, lights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lights = Some(lights.into_iter().map(Into::into).collect());
        self
    }

    /// Asks the bridge to overwrite the stored light states with the lights'
    /// current state.
    #[must_use]
    pub fn with_store_light_state(mut self, store: bool) -> Self {
        self.store_light_state = Some(store);
        self
    }

    /// Sets the transition time of the stored light states.
    #[must_use]
    pub fn with_transition_time(mut self, transition: TransitionTime) -> Self {
        self.transition_time = Some(transition);
        self
    }

    /// Sets the transition time from a duration, converted to deciseconds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if the duration exceeds the
    /// bridge's 16-bit decisecond range.
    pub fn with_transition(self, duration: Duration) -> Result<Self, ValidationError> {
        Ok(self.with_transition_time(TransitionTime::try_from(duration)?))
    }

    /// Returns the new name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the new light list, if set.
    #[must_use]
    pub fn lights(&self) -> Option<&[String]> {
        self.lights.as_deref()
    }

    /// Returns the store flag, if set.
    #[must_use]
    pub fn store_light_state(&self) -> Option<bool> {
        self.store_light_state
    }

    /// Returns the transition time, if set.
    #[must_use]
    pub fn transition_time(&self) -> Option<TransitionTime> {
        self.transition_time
    }

    /// Checks that the update can be sent.
    ///
    /// # Errors
    ///
    /// - `EmptyArgument("update")` if nothing is set
    /// - `EmptyArgument("name")` if the name is blank
    /// - `TransitionWithoutCapture` if a transition time is set without
    ///   `store_light_state` being `true`
    pub fn validate(&self) -> Result<(), ValidationError> {
        if *self == Self::default() {
            return Err(ValidationError::EmptyArgument("update"));
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ValidationError::EmptyArgument("name"));
        }
        if self.transition_time.is_some() && self.store_light_state != Some(true) {
            return Err(ValidationError::TransitionWithoutCapture);
        }
        Ok(())
    }
}

impl Command for SceneUpdate {}
