// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `HueBridge` Lib - A Rust library to manage scenes on a Hue bridge.
//!
//! This library provides async APIs over the bridge's REST interface: it
//! builds request paths, serializes commands to the bridge's JSON dialect,
//! and turns the bridge's loosely typed responses into typed values.
//!
//! # Supported Features
//!
//! - **Scenes**: list, read, create, update, replace, delete
//! - **Scene light states**: change the stored state of one light in a scene
//! - **Recall**: activate a scene on a group through its action endpoint
//! - **Response envelopes**: per-operation success and error outcomes
//!
//! # Quick Start
//!
//! ```no_run
//! use huebridge_lib::Bridge;
//! use huebridge_lib::command::SceneUpdate;
//! use huebridge_lib::types::Scene;
//!
//! #[tokio::main]
//! async fn main() -> huebridge_lib::Result<()> {
//!     // The bridge only becomes usable once an application key is supplied
//!     let bridge = Bridge::http("192.168.1.2")
//!         .authenticate("1028d66426293e821ecfd9ef1a0731df")?;
//!
//!     for scene in bridge.get_scenes().await? {
//!         println!("{:?}: {:?}", scene.id, scene.name);
//!     }
//!
//!     let id = bridge.create_scene(&Scene::new("Evening", ["1", "2"])).await?;
//!
//!     let envelope = bridge
//!         .update_scene(&id, &SceneUpdate::new().with_name("Late evening"))
//!         .await?;
//!     if let Some(err) = envelope.first_error() {
//!         eprintln!("rename failed: {err}");
//!     }
//!
//!     bridge.recall_scene_all(&id).await?;
//!     Ok(())
//! }
//! ```

mod bridge;
pub mod command;
pub mod error;
pub mod protocol;
pub mod response;
pub mod types;

pub use bridge::{ALL_LIGHTS_GROUP, Bridge, BridgeBuilder};
pub use command::{Alert, Command, Effect, LightCommand, SceneCommand, SceneUpdate};
pub use error::{Error, ParseError, ProtocolError, Result, ValidationError};
pub use protocol::{BridgeConfig, HttpClient, Method, Transport};
pub use response::{
    BridgeError, BridgeErrorKind, Outcome, ResultEnvelope, parse_collection, parse_envelope,
    parse_single,
};
pub use types::{AppData, Entity, Scene, TransitionTime};
