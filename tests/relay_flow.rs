//! End-to-end flow through the application layer.
//!
//! Wires the broadcasters and the command relay to an in-memory emitter and
//! a mock frame source, then drives them with client commands.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use rover_link::adapters::camera::MockFrameSource;
use rover_link::adapters::events::InMemoryEmitter;
use rover_link::adapters::telemetry::LiveHeightTelemetry;
use rover_link::application::{
    CommandRelay, FrameBroadcaster, FrameBroadcasterConfig, TelemetryBroadcaster,
};
use rover_link::domain::camera::CameraName;
use rover_link::domain::command::ClientCommand;
use rover_link::domain::events::{CameraStatus, ServerEvent, StreamStatus};
use rover_link::ports::TelemetrySource;

const FRAME_INTERVAL: Duration = Duration::from_millis(5);

struct Rig {
    emitter: Arc<InMemoryEmitter>,
    frames: Arc<FrameBroadcaster>,
    telemetry: Arc<LiveHeightTelemetry>,
    relay: CommandRelay,
}

async fn rig() -> Rig {
    let emitter = Arc::new(InMemoryEmitter::new());
    let frames = Arc::new(FrameBroadcaster::with_config(
        Arc::new(MockFrameSource::new()),
        emitter.clone(),
        FrameBroadcasterConfig::default().with_frame_interval(FRAME_INTERVAL),
    ));
    let telemetry = Arc::new(LiveHeightTelemetry::default());
    let relay = CommandRelay::new(frames.clone(), telemetry.clone(), emitter.clone());

    frames.start().await;

    Rig {
        emitter,
        frames,
        telemetry,
        relay,
    }
}

/// Waits until a frame from `camera` has been emitted, or panics.
async fn wait_for_frame(emitter: &InMemoryEmitter, camera: CameraName) {
    for _ in 0..200 {
        if emitter.frame_cameras().contains(&camera) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("no frame from {} was emitted", camera);
}

fn camera_statuses(emitter: &InMemoryEmitter) -> Vec<CameraStatus> {
    emitter
        .events()
        .into_iter()
        .filter_map(|event| match event {
            ServerEvent::CameraStatus(status) => Some(status),
            _ => None,
        })
        .collect()
}

#[tokio::test]
async fn every_camera_can_be_selected_and_streams() {
    let rig = rig().await;
    wait_for_frame(&rig.emitter, CameraName::FrontLeft).await;

    for camera in CameraName::ALL {
        rig.relay
            .handle(ClientCommand::StartCamera(
                json!({"camera_name": camera.as_str()}),
            ))
            .await
            .unwrap();
        rig.emitter.clear();

        wait_for_frame(&rig.emitter, camera).await;
        assert!(rig.emitter.frame_cameras().iter().all(|c| *c == camera));
    }

    rig.frames.shutdown().await;
}

#[tokio::test]
async fn switching_stops_frames_from_previous_camera() {
    let rig = rig().await;
    wait_for_frame(&rig.emitter, CameraName::FrontLeft).await;

    rig.relay
        .handle(ClientCommand::StartCamera(json!({"camera_name": "bottom"})))
        .await
        .unwrap();
    wait_for_frame(&rig.emitter, CameraName::Bottom).await;
    tokio::time::sleep(FRAME_INTERVAL * 4).await;

    let events = rig.emitter.events();
    let switched_at = events
        .iter()
        .position(|event| matches!(event, ServerEvent::CameraStatus(s) if s.status == StreamStatus::Streaming))
        .expect("streaming status emitted");

    let stale = events[switched_at..]
        .iter()
        .filter(|event| matches!(event, ServerEvent::CameraFrame(f) if f.camera_name == CameraName::FrontLeft))
        .count();
    assert_eq!(stale, 0);

    rig.frames.shutdown().await;
}

#[tokio::test]
async fn rapid_switches_leave_exactly_one_stream() {
    let rig = rig().await;

    let targets = [
        CameraName::Bottom,
        CameraName::FrontRight,
        CameraName::FrontLeft,
        CameraName::Bottom,
    ];
    let commands = targets.iter().map(|camera| {
        rig.relay.handle(ClientCommand::StartCamera(
            json!({"camera_name": camera.as_str()}),
        ))
    });
    for result in futures::future::join_all(commands).await {
        result.unwrap();
    }

    let active = rig.frames.active_camera().await;
    rig.emitter.clear();
    tokio::time::sleep(FRAME_INTERVAL * 6).await;

    let cameras = rig.emitter.frame_cameras();
    assert!(!cameras.is_empty());
    assert!(cameras.iter().all(|c| *c == active));

    rig.frames.shutdown().await;
}

#[tokio::test]
async fn unknown_camera_reports_one_error_and_keeps_stream() {
    let rig = rig().await;
    wait_for_frame(&rig.emitter, CameraName::FrontLeft).await;

    let result = rig
        .relay
        .handle(ClientCommand::StartCamera(json!({"camera_name": "rear"})))
        .await;
    assert!(result.is_err());

    let statuses = camera_statuses(&rig.emitter);
    assert_eq!(statuses.len(), 1);
    assert_eq!(statuses[0].status, StreamStatus::Error);

    rig.emitter.clear();
    wait_for_frame(&rig.emitter, CameraName::FrontLeft).await;
    assert!(rig
        .emitter
        .frame_cameras()
        .iter()
        .all(|c| *c == CameraName::FrontLeft));

    rig.frames.shutdown().await;
}

#[tokio::test]
async fn height_presses_show_up_in_periodic_telemetry() {
    let rig = rig().await;
    let broadcaster = TelemetryBroadcaster::new(rig.telemetry.clone(), rig.emitter.clone());

    for _ in 0..2 {
        rig.relay
            .handle(ClientCommand::ButtonPress(json!("increase_height")))
            .await
            .unwrap();
    }
    assert_eq!(rig.telemetry.height().await.meters(), 1.0);

    broadcaster.broadcast_once().await;
    match rig.emitter.events_named("telemetry_data").last() {
        Some(ServerEvent::TelemetryData(snapshot)) => assert_eq!(snapshot.height.meters(), 1.0),
        other => panic!("expected telemetry_data, got {:?}", other),
    }

    for _ in 0..5 {
        rig.relay
            .handle(ClientCommand::ButtonPress(json!("decrease_height")))
            .await
            .unwrap();
    }
    assert_eq!(rig.telemetry.height().await.meters(), 0.0);

    rig.frames.shutdown().await;
}

#[tokio::test]
async fn malformed_payloads_produce_error_events_and_keep_running() {
    let rig = rig().await;

    assert!(rig
        .relay
        .handle(ClientCommand::StartCamera(json!("{broken")))
        .await
        .is_err());
    assert!(rig
        .relay
        .handle(ClientCommand::ActuatorCommand(json!("{broken")))
        .await
        .is_err());
    assert!(rig
        .relay
        .handle(ClientCommand::ActuatorCommand(json!({"actuator": "one"})))
        .await
        .is_err());

    assert_eq!(rig.emitter.count_named("camera_status"), 1);
    let acks: Vec<_> = rig
        .emitter
        .events_named("actuator_status")
        .into_iter()
        .filter_map(|event| match event {
            ServerEvent::ActuatorStatus(status) => Some(status),
            _ => None,
        })
        .collect();
    assert_eq!(acks.len(), 2);
    assert!(acks.iter().all(|ack| !ack.is_success()));

    rig.relay
        .handle(ClientCommand::SetTask(json!({"task": "survey"})))
        .await
        .unwrap();
    assert_eq!(rig.emitter.count_named("status"), 1);

    rig.frames.shutdown().await;
}
