//! Telemetry errors.

use thiserror::Error;

use crate::domain::foundation::ErrorKind;

/// Errors raised by telemetry sources and height commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TelemetryError {
    #[error("Unknown button press command: {0}")]
    UnknownAdjustment(String),

    #[error("Height is fixed by the configured telemetry source")]
    HeightFixed,
}

impl TelemetryError {
    /// Classification for logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TelemetryError::UnknownAdjustment(_) => ErrorKind::InvalidReference,
            TelemetryError::HeightFixed => ErrorKind::Unsupported,
        }
    }
}
