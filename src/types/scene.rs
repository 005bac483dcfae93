// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::types::Entity;

/// Application-specific data stored alongside a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppData {
    /// Version of the data format, chosen by the application.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Opaque data string (max 16 characters on the bridge).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// A named snapshot of light states stored on the bridge.
///
/// Every attribute is optional so that a scene can be sent back to the
/// bridge with only the fields that should change. Absent attributes are
/// never serialized.
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::Scene;
///
/// let scene = Scene::new("Evening", ["1", "2"]);
/// assert_eq!(scene.name.as_deref(), Some("Evening"));
/// assert_eq!(scene.lights.as_ref().map(Vec::len), Some(2));
/// assert!(scene.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Identifier; filled from the collection key or lookup key when parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Human readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// IDs of the lights taking part in the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lights: Option<Vec<String>>,

    /// Whitelist user that created the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,

    /// Whether the bridge may delete the scene when it runs out of space.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recycle: Option<bool>,

    /// Set when the scene is referenced by a rule or schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,

    /// Application-specific data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appdata: Option<AppData>,

    /// Picture identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    /// Time of the last change made by the bridge.
    #[serde(
        rename = "lastupdated",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<NaiveDateTime>,

    /// Scene format version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Stored state per light ID. Only returned when reading a single scene.
    ///
    /// Read-only here: individual states are changed with
    /// `Bridge::modify_scene_light_state`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightstates: Option<Map<String, Value>>,
}

impl Scene {
    /// Creates a scene with a name and a set of lights.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, lights: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            lights: Some(lights.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    /// Sets the recycle flag.
    #[must_use]
    pub fn with_recycle(mut self, recycle: bool) -> Self {
        self.recycle = Some(recycle);
        self
    }

    /// Sets the application data.
    #[must_use]
    pub fn with_appdata(mut self, appdata: AppData) -> Self {
        self.appdata = Some(appdata);
        self
    }
}

impl Entity for Scene {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn clear_non_updatable(&mut self) {
        self.id = None;
        self.recycle = None;
        self.owner = None;
        self.locked = None;
        self.last_updated = None;
        self.version = None;
        self.lightstates = None;
    }
}
