//! Camera selection errors.

use thiserror::Error;

use crate::domain::foundation::ErrorKind;

/// Errors raised when selecting the active camera stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("Unknown camera: {0}")]
    UnknownCamera(String),

    #[error("Camera name missing from request")]
    MissingCameraName,

    #[error("Camera switching is disabled")]
    SwitchingDisabled,
}

impl CameraError {
    /// Classification for logging and error events.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CameraError::UnknownCamera(_) | CameraError::MissingCameraName => {
                ErrorKind::InvalidReference
            }
            CameraError::SwitchingDisabled => ErrorKind::Unsupported,
        }
    }

    /// Message sent back to the client in a `camera_status` error.
    pub fn client_message(&self) -> &'static str {
        match self {
            CameraError::UnknownCamera(_) | CameraError::MissingCameraName => {
                "Invalid camera name"
            }
            CameraError::SwitchingDisabled => "Camera switching is disabled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_camera_is_invalid_reference() {
        let err = CameraError::UnknownCamera("rear".to_string());
        assert_eq!(err.kind(), ErrorKind::InvalidReference);
        assert_eq!(err.client_message(), "Invalid camera name");
        assert_eq!(err.to_string(), "Unknown camera: rear");
    }

    #[test]
    fn switching_disabled_is_unsupported() {
        assert_eq!(CameraError::SwitchingDisabled.kind(), ErrorKind::Unsupported);
    }
}
