// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Success/error envelope returned by write operations.

use serde::Deserialize;
use serde_json::Value;

use crate::error::ParseError;
use crate::response::BridgeError;

/// One outcome within a [`ResultEnvelope`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A sub-operation succeeded.
    ///
    /// The bridge usually reports `{"success": {"<path>": <value>}}`; `path`
    /// is that single key. For other bodies (a bare string, or an object with
    /// several keys) `path` is `None` and `value` holds the whole body.
    Success {
        /// Resource path or attribute the success refers to.
        path: Option<String>,
        /// Value written or returned.
        value: Value,
    },
    /// A sub-operation failed.
    Error(BridgeError),
}

impl Outcome {
    /// Returns `true` for a success outcome.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    fn from_success_body(body: Value) -> Self {
        match body {
            Value::Object(map) if map.len() == 1 => {
                let mut entries = map.into_iter();
                match entries.next() {
                    Some((path, value)) => Self::Success {
                        path: Some(path),
                        value,
                    },
                    None => Self::Success {
                        path: None,
                        value: Value::Null,
                    },
                }
            }
            other => Self::Success {
                path: None,
                value: other,
            },
        }
    }
}

/// Wire shape of an envelope entry: an object with exactly one key.
#[derive(Deserialize)]
enum TaggedEntry {
    #[serde(rename = "success")]
    Success(Value),
    #[serde(rename = "error")]
    Error(BridgeError),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Known(TaggedEntry),
    Malformed(Value),
}

/// Ordered outcomes of a write request, one per sub-operation.
///
/// # Examples
///
/// ```
/// use huebridge_lib::response::parse_envelope;
///
/// let envelope = parse_envelope(r#"[{"success": {"id": "abc"}}]"#).unwrap();
/// assert_eq!(envelope.len(), 1);
/// assert_eq!(envelope.created_id(), Some("abc"));
/// assert!(!envelope.has_errors());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    outcomes: Vec<Outcome>,
}

impl ResultEnvelope {
    /// Returns all outcomes in response order.
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Returns the number of outcomes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns `true` if there are no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterates over the outcomes.
    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.outcomes.iter()
    }

    /// Iterates over success outcomes as `(path, value)` pairs.
    pub fn successes(&self) -> impl Iterator<Item = (Option<&str>, &Value)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Success { path, value } => Some((path.as_deref(), value)),
            Outcome::Error(_) => None,
        })
    }

    /// Iterates over error outcomes.
    pub fn errors(&self) -> impl Iterator<Item = &BridgeError> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            Outcome::Error(err) => Some(err),
            Outcome::Success { .. } => None,
        })
    }

    /// Returns `true` if at least one outcome is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Returns the first error, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&BridgeError> {
        self.errors().next()
    }

    /// Returns the value of the first success whose path equals `path`.
    #[must_use]
    pub fn success_value(&self, path: &str) -> Option<&Value> {
        self.successes()
            .find(|(p, _)| *p == Some(path))
            .map(|(_, value)| value)
    }

    /// Returns the non-empty ID carried by a creation response.
    #[must_use]
    pub fn created_id(&self) -> Option<&str> {
        self.success_value("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
    }

    /// Converts the envelope into an error if any outcome failed.
    ///
    /// # Errors
    ///
    /// Returns the first [`BridgeError`] found.
    pub fn into_result(self) -> Result<Self, BridgeError> {
        match self.first_error() {
            Some(err) => Err(err.clone()),
            None => Ok(self),
        }
    }
}

impl IntoIterator for ResultEnvelope {
    type Item = Outcome;
    type IntoIter = std::vec::IntoIter<Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultEnvelope {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

/// Parses a bridge envelope: a JSON array of `success` / `error` entries.
///
/// # Errors
///
/// Returns `ParseError` if the text is not JSON, the top level is not a
/// non-empty array, or an entry has neither shape.
pub fn parse_envelope(raw: &str) -> Result<ResultEnvelope, ParseError> {
    let value: Value = serde_json::from_str(raw)?;
    envelope_from_value(value)
}

pub(crate) fn envelope_from_value(value: Value) -> Result<ResultEnvelope, ParseError> {
    let Value::Array(items) = value else {
        return Err(ParseError::UnexpectedFormat(
            "expected a JSON array of results".to_string(),
        ));
    };

    if items.is_empty() {
        return Err(ParseError::UnexpectedFormat(
            "empty result array".to_string(),
        ));
    }

    let entries: Vec<RawEntry> = serde_json::from_value(Value::Array(items))?;

    let outcomes = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| match entry {
            RawEntry::Known(TaggedEntry::Success(body)) => Ok(Outcome::from_success_body(body)),
            RawEntry::Known(TaggedEntry::Error(err)) => Ok(Outcome::Error(err)),
            RawEntry::Malformed(entry) => Err(ParseError::MalformedResponse {
                index,
                entry: entry.to_string(),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResultEnvelope { outcomes })
}
