// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Light state command.

use serde::Serialize;

use crate::command::Command;
use crate::types::TransitionTime;

/// Alert effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alert {
    /// Stop any alert.
    None,
    /// One breathe cycle.
    Select,
    /// Breathe cycles for 15 seconds.
    #[serde(rename = "lselect")]
    LongSelect,
}

/// Dynamic effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    /// No effect.
    None,
    /// Cycle through all hues at the current brightness and saturation.
    ColorLoop,
}

/// Changes the state of a light, a group, or a light within a scene.
///
/// Only the attributes that were set are sent.
///
/// # Examples
///
/// ```
/// use huebridge_lib::command::{Alert, Command, LightCommand};
/// use huebridge_lib::types::TransitionTime;
///
/// let cmd = LightCommand::new()
///     .turn_off()
///     .with_alert(Alert::Select)
///     .with_transition_time(TransitionTime::INSTANT);
///
/// assert_eq!(
///     cmd.to_json().unwrap(),
///     r#"{"on":false,"alert":"select","transitiontime":0}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LightCommand {
    #[serde(skip_serializing_if = "Option::is_none")]
    on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xy: Option<[f32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    alert: Option<Alert>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effect: Option<Effect>,
    #[serde(rename = "transitiontime", skip_serializing_if = "Option::is_none")]
    transition_time: Option<TransitionTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bri_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sat_inc: Option<i16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hue_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ct_inc: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    xy_inc: Option<f32>,
}

impl LightCommand {
    /// Highest brightness the bridge accepts.
    pub const MAX_BRIGHTNESS: u8 = 254;
    /// Highest saturation the bridge accepts.
    pub const MAX_SATURATION: u8 = 254;
    /// Coolest color temperature in mireds.
    pub const MIN_COLOR_TEMPERATURE: u16 = 153;
    /// Warmest color temperature in mireds.
    pub const MAX_COLOR_TEMPERATURE: u16 = 500;

    /// Creates an empty command.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns the light on.
    #[must_use]
    pub fn turn_on(mut self) -> Self {
        self.on = Some(true);
        self
    }

    /// Turns the light off.
    #[must_use]
    pub fn turn_off(mut self) -> Self {
        self.on = Some(false);
        self
    }

    /// Sets the brightness, clamped to 1-254.
    #[must_use]
    pub fn with_brightness(mut self, bri: u8) -> Self {
        self.bri = Some(bri.clamp(1, Self::MAX_BRIGHTNESS));
        self
    }

    /// Sets the hue (0-65535, wrapping around red).
    #[must_use]
    pub fn with_hue(mut self, hue: u16) -> Self {
        self.hue = Some(hue);
        self
    }

    /// Sets the saturation, clamped to 0-254.
    #[must_use]
    pub fn with_saturation(mut self, sat: u8) -> Self {
        self.sat = Some(sat.min(Self::MAX_SATURATION));
        self
    }

    /// Sets the CIE color coordinates, each clamped to 0.0-1.0.
    #[must_use]
    pub fn with_xy(mut self, x: f32, y: f32) -> Self {
        self.xy = Some([x.clamp(0.0, 1.0), y.clamp(0.0, 1.0)]);
        self
    }

    /// Sets the color temperature in mireds, clamped to 153-500.
    #[must_use]
    pub fn with_color_temperature(mut self, ct: u16) -> Self {
        self.ct = Some(ct.clamp(Self::MIN_COLOR_TEMPERATURE, Self::MAX_COLOR_TEMPERATURE));
        self
    }

    /// Sets the alert effect.
    #[must_use]
    pub fn with_alert(mut self, alert: Alert) -> Self {
        self.alert = Some(alert);
        self
    }

    /// Sets the dynamic effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Sets the transition time.
    #[must_use]
    pub fn with_transition_time(mut self, transition: TransitionTime) -> Self {
        self.transition_time = Some(transition);
        self
    }

    /// Changes brightness relative to the current value (-254 to 254).
    #[must_use]
    pub fn increment_brightness(mut self, delta: i16) -> Self {
        self.bri_inc = Some(delta.clamp(-254, 254));
        self
    }

    /// Changes saturation relative to the current value (-254 to 254).
    #[must_use]
    pub fn increment_saturation(mut self, delta: i16) -> Self {
        self.sat_inc = Some(delta.clamp(-254, 254));
        self
    }

    /// Changes hue relative to the current value (-65534 to 65534).
    #[must_use]
    pub fn increment_hue(mut self, delta: i32) -> Self {
        self.hue_inc = Some(delta.clamp(-65_534, 65_534));
        self
    }

    /// Changes color temperature relative to the current value (-65534 to 65534).
    #[must_use]
    pub fn increment_color_temperature(mut self, delta: i32) -> Self {
        self.ct_inc = Some(delta.clamp(-65_534, 65_534));
        self
    }

    /// Changes both xy coordinates relative to the current value (-0.5 to 0.5).
    #[must_use]
    pub fn increment_xy(mut self, delta: f32) -> Self {
        self.xy_inc = Some(delta.clamp(-0.5, 0.5));
        self
    }

    /// Returns `true` if no attribute is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Command for LightCommand {}
