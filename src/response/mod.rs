// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of bridge JSON responses.
//!
//! The bridge answers in three shapes:
//!
//! - write operations return an envelope, `[{"success": ...}, {"error": ...}]`,
//!   parsed by [`parse_envelope`]
//! - "list all" endpoints return an object keyed by ID, parsed by
//!   [`parse_collection`]
//! - single resource reads return one object, parsed by [`parse_single`]

mod bridge_error;
mod collection;
mod envelope;

pub use bridge_error::{BridgeError, BridgeErrorKind};
pub use collection::{parse_collection, parse_single};
pub use envelope::{Outcome, ResultEnvelope, parse_envelope};
