// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Entities and value types exchanged with the bridge.
//!
//! # Types
//!
//! - [`Scene`] - Stored snapshot of light states
//! - [`AppData`] - Application data attached to a scene
//! - [`TransitionTime`] - Duration in deciseconds
//! - [`Entity`] - Common behavior of ID-keyed bridge resources

mod scene;
mod transition;

pub use scene::{AppData, Scene};
pub use transition::TransitionTime;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A bridge resource addressed by a string ID.
///
/// The bridge usually does not repeat the ID inside a resource body; it is
/// the key under which the body was returned. Implementors expose the ID slot
/// so the translator can fill it in, and know which of their fields the
/// bridge refuses on update.
pub trait Entity: Serialize + DeserializeOwned + Clone {
    /// Returns the ID, if one is known.
    fn id(&self) -> Option<&str>;

    /// Replaces the ID.
    fn set_id(&mut self, id: String);

    /// Clears every field the bridge assigns itself, the ID included.
    fn clear_non_updatable(&mut self);

    /// Returns a copy with every non-updatable field cleared.
    #[must_use]
    fn strip_non_updatable(&self) -> Self {
        let mut copy = self.clone();
        copy.clear_non_updatable();
        copy
    }
}
