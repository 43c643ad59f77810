//! Outbound events pushed to connected clients.
//!
//! These are the internal representation; `adapters::websocket::messages`
//! turns them into wire messages.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::camera::CameraName;
use super::telemetry::{Height, TelemetrySnapshot};

/// Every event the server can emit.
#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    ConnectionStatus(ConnectionStatus),
    CameraStatus(CameraStatus),
    CameraFrame(CameraFrame),
    TelemetryData(TelemetrySnapshot),
    Telemetry(HeightReport),
    Status(Acknowledgement),
    CommandStatus(Acknowledgement),
    ActuatorStatus(ActuatorStatus),
}

impl ServerEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            ServerEvent::ConnectionStatus(_) => "connection_status",
            ServerEvent::CameraStatus(_) => "camera_status",
            ServerEvent::CameraFrame(_) => "camera_frame",
            ServerEvent::TelemetryData(_) => "telemetry_data",
            ServerEvent::Telemetry(_) => "telemetry",
            ServerEvent::Status(_) => "status",
            ServerEvent::CommandStatus(_) => "command_status",
            ServerEvent::ActuatorStatus(_) => "actuator_status",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionStatus {
    pub status: String,
}

impl ConnectionStatus {
    pub fn connected() -> Self {
        Self {
            status: "connected".to_string(),
        }
    }
}

/// Outcome of a stream selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamStatus {
    Streaming,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera_name: Option<String>,
    pub status: StreamStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CameraStatus {
    pub fn streaming(camera: CameraName) -> Self {
        Self {
            camera_name: Some(camera.to_string()),
            status: StreamStatus::Streaming,
            message: None,
        }
    }

    pub fn error(camera_name: Option<String>, message: impl Into<String>) -> Self {
        Self {
            camera_name,
            status: StreamStatus::Error,
            message: Some(message.into()),
        }
    }
}

/// A JPEG-encoded frame for one camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraFrame {
    pub camera_name: CameraName,
    pub frame: Bytes,
}

/// Height echo sent after a `button_press`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightReport {
    pub height: Height,
}

/// Generic acknowledgement for fire-and-forget commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub result: String,
}

impl Acknowledgement {
    pub fn ok() -> Self {
        Self {
            result: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actuator: Option<i128>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActuatorStatus {
    pub fn received(actuator: i128) -> Self {
        Self {
            actuator: Some(actuator),
            status: "command_received".to_string(),
            message: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            actuator: None,
            status: "error".to_string(),
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == "command_received"
    }
}
