//! FrameSource port - produces JPEG frames for a camera.

use async_trait::async_trait;
use bytes::Bytes;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::camera::CameraName;
use crate::domain::foundation::ErrorKind;

/// Errors that can occur while producing a frame.
#[derive(Debug, Error)]
pub enum FrameError {
    /// Image resource could not be read
    #[error("Failed to read image {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image bytes are not a decodable image
    #[error("Failed to decode image for {camera}: {message}")]
    Decode { camera: CameraName, message: String },

    /// Re-encoding as JPEG failed
    #[error("Failed to encode frame for {camera}: {message}")]
    Encode { camera: CameraName, message: String },

    /// Encoder task was cancelled or panicked
    #[error("Frame encoder task failed: {0}")]
    Task(String),
}

impl FrameError {
    /// Classification for logging.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FrameError::Task(_) => ErrorKind::Internal,
            _ => ErrorKind::ResourceUnavailable,
        }
    }
}

/// Source of encoded frames.
///
/// Called once per broadcast tick, so implementations may reload the image
/// every time (the original resource can change on disk).
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// Loads the current image for `camera` and returns it JPEG-encoded.
    async fn load_frame(&self, camera: CameraName) -> Result<Bytes, FrameError>;
}
