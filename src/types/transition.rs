// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Transition time expressed in the bridge's native unit.
//!
//! The bridge counts transition durations in deciseconds (1/10 s). This type
//! keeps the value in that unit so it can be serialized as-is.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Transition duration in deciseconds (0-65535).
///
/// # Examples
///
/// ```
/// use huebridge_lib::types::TransitionTime;
/// use std::time::Duration;
///
/// let t = TransitionTime::from_secs(3).unwrap();
/// assert_eq!(t.deciseconds(), 30);
///
/// let t = TransitionTime::try_from(Duration::from_millis(1500)).unwrap();
/// assert_eq!(t.deciseconds(), 15);
///
/// assert!(TransitionTime::from_secs(7000).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransitionTime(u16);

impl TransitionTime {
    /// Immediate change.
    pub const INSTANT: Self = Self(0);

    /// The bridge's own default when no transition is given (400 ms).
    pub const BRIDGE_DEFAULT: Self = Self(4);

    /// Creates a transition time from a raw decisecond count.
    #[must_use]
    pub const fn from_deciseconds(deciseconds: u16) -> Self {
        Self(deciseconds)
    }

    /// Creates a transition time from whole seconds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::OutOfRange` if `seconds * 10` does not fit
    /// in 16 bits.
    pub fn from_secs(seconds: u64) -> Result<Self, ValidationError> {
        Self::from_total_deciseconds(seconds.saturating_mul(10))
    }

    /// Returns the value in deciseconds.
    #[must_use]
    pub const fn deciseconds(&self) -> u16 {
        self.0
    }

    /// Returns the value as a [`Duration`].
    #[must_use]
    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.0) * 100)
    }

    fn from_total_deciseconds(total: u64) -> Result<Self, ValidationError> {
        u16::try_from(total)
            .map(Self)
            .map_err(|_| ValidationError::OutOfRange {
                min: 0,
                max: u64::from(u16::MAX),
                actual: total,
            })
    }
}

impl TryFrom<Duration> for TransitionTime {
    type Error = ValidationError;

    /// Converts a duration, truncating below one decisecond.
    fn try_from(duration: Duration) -> Result<Self, Self::Error> {
        let total = duration.as_millis() / 100;
        Self::from_total_deciseconds(u64::try_from(total).unwrap_or(u64::MAX))
    }
}

impl fmt::Display for TransitionTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}s", self.0 / 10, self.0 % 10)
    }
}
