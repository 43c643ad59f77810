//! Command errors.

use serde_json::Value;
use thiserror::Error;

use crate::domain::camera::CameraError;
use crate::domain::foundation::ErrorKind;
use crate::domain::telemetry::TelemetryError;

/// Errors raised while decoding or executing a client command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Invalid JSON payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Invalid actuator ID: {0}")]
    InvalidActuator(Value),

    #[error(transparent)]
    Camera(#[from] CameraError),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

impl CommandError {
    /// Classification for logging and error events.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::UnknownEvent(_) | CommandError::InvalidActuator(_) => {
                ErrorKind::InvalidReference
            }
            CommandError::MalformedPayload(_) => ErrorKind::MalformedPayload,
            CommandError::Camera(err) => err.kind(),
            CommandError::Telemetry(err) => err.kind(),
        }
    }
}
