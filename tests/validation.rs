// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Argument validation happens before any request reaches the transport.

use std::sync::atomic::{AtomicUsize, Ordering};

use huebridge_lib::command::{LightCommand, SceneUpdate};
use huebridge_lib::protocol::{BridgeConfig, Method, Transport};
use huebridge_lib::types::{Scene, TransitionTime};
use huebridge_lib::{Bridge, Error, ProtocolError, ValidationError};

/// Transport that counts requests and always answers with one success.
#[derive(Debug, Default)]
struct CountingTransport {
    requests: AtomicUsize,
}

impl CountingTransport {
    fn count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl Transport for CountingTransport {
    async fn request(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<String>,
    ) -> Result<String, ProtocolError> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(r#"[{"success":{"id":"1"}}]"#.to_string())
    }
}

fn bridge() -> Bridge<CountingTransport> {
    Bridge::with_transport(CountingTransport::default())
}

fn assert_empty_argument<T: std::fmt::Debug>(result: Result<T, Error>, name: &str) {
    match result {
        Err(Error::Validation(ValidationError::EmptyArgument(arg))) => assert_eq!(arg, name),
        other => panic!("expected empty {name}, got {other:?}"),
    }
}

#[tokio::test]
async fn update_with_empty_id_sends_nothing() {
    let bridge = bridge();
    let update = SceneUpdate::new().with_name("x");

    assert_empty_argument(bridge.update_scene("", &update).await, "id");
    assert_empty_argument(bridge.update_scene("   ", &update).await, "id");
    assert_eq!(bridge.transport().count(), 0);
}

#[tokio::test]
async fn transition_without_capture_sends_nothing() {
    let bridge = bridge();
    let update = SceneUpdate::new()
        .with_lights(["1"])
        .with_transition_time(TransitionTime::from_deciseconds(20));

    assert!(matches!(
        bridge.update_scene("ab34", &update).await,
        Err(Error::Validation(ValidationError::TransitionWithoutCapture))
    ));
    assert_eq!(bridge.transport().count(), 0);
}

#[tokio::test]
async fn create_requires_name_and_lights() {
    let bridge = bridge();

    assert_empty_argument(bridge.create_scene(&Scene::new("", ["1"])).await, "name");
    assert_empty_argument(bridge.create_scene(&Scene::default()).await, "name");

    let no_lights: [&str; 0] = [];
    assert_empty_argument(
        bridge.create_scene(&Scene::new("x", no_lights)).await,
        "lights",
    );
    assert_eq!(bridge.transport().count(), 0);
}

#[tokio::test]
async fn scene_light_state_requires_both_ids_and_a_command() {
    let bridge = bridge();
    let command = LightCommand::new().turn_on();

    assert_empty_argument(
        bridge.modify_scene_light_state("", "1", &command).await,
        "scene_id",
    );
    assert_empty_argument(
        bridge.modify_scene_light_state("ab34", "", &command).await,
        "light_id",
    );
    assert_empty_argument(
        bridge
            .modify_scene_light_state("ab34", "1", &LightCommand::new())
            .await,
        "command",
    );
    assert_eq!(bridge.transport().count(), 0);
}

#[tokio::test]
async fn other_operations_reject_blank_ids() {
    let bridge = bridge();

    assert_empty_argument(bridge.get_scene("").await, "id");
    assert_empty_argument(bridge.delete_scene("").await, "id");
    assert_empty_argument(bridge.replace_scene("", &Scene::default()).await, "id");
    assert_empty_argument(bridge.recall_scene("", "0").await, "scene_id");
    assert_empty_argument(bridge.recall_scene("ab34", "").await, "group_id");
    assert_eq!(bridge.transport().count(), 0);
}

#[tokio::test]
async fn valid_call_reaches_transport_once() {
    let bridge = bridge();
    let id = bridge
        .create_scene(&Scene::new("x", ["1"]))
        .await
        .unwrap();

    assert_eq!(id, "1");
    assert_eq!(bridge.transport().count(), 1);
}

#[test]
fn http_client_requires_a_usable_key() {
    for key in ["", "  "] {
        assert_empty_argument(BridgeConfig::new("192.168.1.2").into_client(key), "app_key");
    }
    for key in ["a b", "a/b"] {
        assert!(matches!(
            BridgeConfig::new("192.168.1.2").into_client(key),
            Err(Error::Validation(ValidationError::InvalidAppKey(_)))
        ));
    }
}
