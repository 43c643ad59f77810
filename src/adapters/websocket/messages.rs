//! WebSocket message types for the rover link protocol.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": <payload>}` in both directions.
//! - Server → Client: connection, camera and telemetry events, acknowledgements
//! - Client → Server: named commands with a free-form payload

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::camera::CameraName;
use crate::domain::command::{ClientCommand, CommandError};
use crate::domain::events::{
    Acknowledgement, ActuatorStatus, CameraFrame, CameraStatus, ConnectionStatus, HeightReport,
    ServerEvent,
};
use crate::domain::telemetry::TelemetrySnapshot;

// ============================================
// Server → Client Messages
// ============================================

/// All message types that can be sent from server to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    ConnectionStatus(ConnectionStatus),
    CameraStatus(CameraStatus),
    CameraFrame(CameraFrameMessage),
    TelemetryData(TelemetrySnapshot),
    Telemetry(HeightReport),
    Status(Acknowledgement),
    CommandStatus(Acknowledgement),
    ActuatorStatus(ActuatorStatus),
}

impl ServerMessage {
    /// Serializes to the JSON text sent on the socket.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Camera frame with the JPEG bytes base64-encoded (standard alphabet).
#[derive(Debug, Clone, Serialize)]
pub struct CameraFrameMessage {
    pub camera_name: CameraName,
    pub frame: String,
}

impl From<CameraFrame> for CameraFrameMessage {
    fn from(frame: CameraFrame) -> Self {
        Self {
            camera_name: frame.camera_name,
            frame: STANDARD.encode(&frame.frame),
        }
    }
}

impl From<ServerEvent> for ServerMessage {
    fn from(event: ServerEvent) -> Self {
        match event {
            ServerEvent::ConnectionStatus(status) => ServerMessage::ConnectionStatus(status),
            ServerEvent::CameraStatus(status) => ServerMessage::CameraStatus(status),
            ServerEvent::CameraFrame(frame) => ServerMessage::CameraFrame(frame.into()),
            ServerEvent::TelemetryData(snapshot) => ServerMessage::TelemetryData(snapshot),
            ServerEvent::Telemetry(report) => ServerMessage::Telemetry(report),
            ServerEvent::Status(ack) => ServerMessage::Status(ack),
            ServerEvent::CommandStatus(ack) => ServerMessage::CommandStatus(ack),
            ServerEvent::ActuatorStatus(status) => ServerMessage::ActuatorStatus(status),
        }
    }
}

// ============================================
// Client → Server Messages
// ============================================

/// Envelope for every message received from a client.
///
/// The payload is kept as raw JSON; validation happens per command.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientMessage {
    pub event: String,
    #[serde(default)]
    pub data: Value,
}

impl ClientMessage {
    /// Resolves the envelope into a command.
    pub fn into_command(self) -> Result<ClientCommand, CommandError> {
        ClientCommand::from_event(&self.event, self.data)
    }
}
