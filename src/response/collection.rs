// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parsing of ID-keyed collections and single resources.
//!
//! "List all" endpoints answer with an object keyed by resource ID:
//!
//! ```json
//! {
//!     "1": {"name": "My Scene 1", "lights": ["1", "2", "3"], "recycle": true},
//!     "2": {"name": "My Scene 2", "lights": ["1", "2", "3"], "recycle": true}
//! }
//! ```
//!
//! The key is the authoritative ID of each entity.

use serde_json::Value;

use crate::error::{Error, ParseError};
use crate::response::envelope::envelope_from_value;
use crate::types::Entity;

/// Parses an ID-keyed collection into entities, in the order returned.
///
/// Each property name becomes the entity's ID, replacing any ID embedded in
/// the body. A top-level value that is not an object yields an empty list.
///
/// # Errors
///
/// Returns `ParseError` if the text is not JSON or a property value does not
/// decode as `T`.
///
/// # Examples
///
/// ```
/// use huebridge_lib::response::parse_collection;
/// use huebridge_lib::types::Scene;
///
/// let scenes: Vec<Scene> =
///     parse_collection(r#"{"7": {"name": "Relax", "lights": ["1"]}}"#).unwrap();
/// assert_eq!(scenes[0].id.as_deref(), Some("7"));
///
/// let none: Vec<Scene> = parse_collection("[]").unwrap();
/// assert!(none.is_empty());
/// ```
pub fn parse_collection<T: Entity>(raw: &str) -> Result<Vec<T>, ParseError> {
    let value: Value = serde_json::from_str(raw)?;

    let Value::Object(map) = value else {
        tracing::trace!("Collection response is not an object, treating as empty");
        return Ok(Vec::new());
    };

    map.into_iter()
        .map(|(id, body)| {
            let mut entity: T = serde_json::from_value(body)?;
            entity.set_id(id);
            Ok::<T, ParseError>(entity)
        })
        .collect()
}

/// Parses a single resource body.
///
/// If the body carries no (or an empty) ID, `lookup_key` is used instead.
///
/// # Errors
///
/// - `Error::Bridge` if the bridge answered with an error envelope
///   (for example, resource not available)
/// - `Error::Parse` if the text is not JSON or has an unexpected shape
pub fn parse_single<T: Entity>(raw: &str, lookup_key: &str) -> Result<T, Error> {
    let value: Value = serde_json::from_str(raw).map_err(ParseError::from)?;

    match value {
        Value::Object(_) => {
            let mut entity: T = serde_json::from_value(value).map_err(ParseError::from)?;
            if entity.id().is_none_or(str::is_empty) {
                entity.set_id(lookup_key.to_string());
            }
            Ok(entity)
        }
        Value::Array(_) => {
            let envelope = envelope_from_value(value)?;
            match envelope.into_result() {
                Err(err) => Err(Error::Bridge(err)),
                Ok(_) => Err(ParseError::UnexpectedFormat(
                    "expected an object, got a result array".to_string(),
                )
                .into()),
            }
        }
        other => {
            Err(ParseError::UnexpectedFormat(format!("expected an object, got {other}")).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Scene;

    const TWO_SCENES: &str = r#"{
        "1": {"name": "My Scene 1", "lights": ["1", "2", "3"], "recycle": true},
        "2": {"name": "My Scene 2", "lights": ["1", "2", "3"], "recycle": true}
    }"#;

    #[test]
    fn collection_keys_become_ids() {
        let scenes: Vec<Scene> = parse_collection(TWO_SCENES).unwrap();
        assert_eq!(scenes.len(), 2);
        assert_eq!(scenes[0].id.as_deref(), Some("1"));
        assert_eq!(scenes[0].name.as_deref(), Some("My Scene 1"));
        assert_eq!(scenes[1].id.as_deref(), Some("2"));
        assert_eq!(scenes[1].recycle, Some(true));
    }

    #[test]
    fn collection_key_overrides_embedded_id() {
        let scenes: Vec<Scene> =
            parse_collection(r#"{"ab34": {"id": "zz", "name": "x"}, "cd56": {"name": "y"}}"#)
                .unwrap();
        let ids: Vec<_> = scenes.iter().map(|s| s.id.as_deref()).collect();
        assert_eq!(ids, vec![Some("ab34"), Some("cd56")]);
    }

    #[test]
    fn collection_preserves_server_order() {
        let scenes: Vec<Scene> =
            parse_collection(r#"{"9": {}, "10": {}, "2": {}}"#).unwrap();
        let ids: Vec<_> = scenes.iter().map(|s| s.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["9", "10", "2"]);
    }

    #[test]
    fn empty_object_is_empty_collection() {
        let scenes: Vec<Scene> = parse_collection("{}").unwrap();
        assert!(scenes.is_empty());
    }

    #[test]
    fn non_object_is_empty_collection() {
        for raw in ["[]", r#"[{"error":{"type":1,"address":"/","description":"x"}}]"#, "42", "null"] {
            let scenes: Vec<Scene> = parse_collection(raw).unwrap();
            assert!(scenes.is_empty(), "expected empty for {raw}");
        }
    }

    #[test]
    fn invalid_json_collection_is_error() {
        let result: Result<Vec<Scene>, _> = parse_collection("{");
        assert!(matches!(result, Err(ParseError::Json(_))));
    }

    #[test]
    fn single_uses_lookup_key_when_id_missing() {
        let scene: Scene = parse_single(r#"{"name": "Relax"}"#, "ab34").unwrap();
        assert_eq!(scene.id.as_deref(), Some("ab34"));
    }

    #[test]
    fn single_uses_lookup_key_when_id_empty() {
        let scene: Scene = parse_single(r#"{"id": "", "name": "Relax"}"#, "ab34").unwrap();
        assert_eq!(scene.id.as_deref(), Some("ab34"));
    }

    #[test]
    fn single_keeps_embedded_id() {
        let scene: Scene = parse_single(r#"{"id": "real", "name": "Relax"}"#, "ab34").unwrap();
        assert_eq!(scene.id.as_deref(), Some("real"));
    }

    #[test]
    fn single_surfaces_bridge_error() {
        let raw = r#"[{"error":{"type":3,"address":"/scenes/nope","description":"resource, /scenes/nope, not available"}}]"#;
        let result: Result<Scene, _> = parse_single(raw, "nope");
        match result {
            Err(Error::Bridge(err)) => assert_eq!(err.error_type, 3),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn single_rejects_scalar() {
        let result: Result<Scene, _> = parse_single("true", "x");
        assert!(matches!(
            result,
            Err(Error::Parse(ParseError::UnexpectedFormat(_)))
        ));
    }
}
