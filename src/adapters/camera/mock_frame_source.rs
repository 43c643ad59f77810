//! Mock frame source for testing.
//!
//! Returns a tiny fake payload per camera (`b"frame:<camera>"`) without
//! touching the filesystem, and can be told to fail for specific cameras.
//!
//! # Example
//!
//! ```ignore
//! let source = MockFrameSource::new().failing_for(CameraName::Bottom);
//! assert!(source.load_frame(CameraName::Bottom).await.is_err());
//! ```

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::domain::camera::CameraName;
use crate::ports::{FrameError, FrameSource};

/// Configurable in-memory frame source.
#[derive(Debug, Clone, Default)]
pub struct MockFrameSource {
    failing: HashSet<CameraName>,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CameraName>>>,
}

impl MockFrameSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every load for `camera` fail with a read error.
    pub fn failing_for(mut self, camera: CameraName) -> Self {
        self.failing.insert(camera);
        self
    }

    /// Payload returned for `camera`.
    pub fn frame_for(camera: CameraName) -> Bytes {
        Bytes::from(format!("frame:{}", camera))
    }

    /// Number of loads requested for `camera` so far.
    ///
    /// # Panics
    ///
    /// Panics if the call log mutex is poisoned (test-only adapter).
    pub fn load_count(&self, camera: CameraName) -> usize {
        self.calls
            .lock()
            .expect("call log poisoned")
            .iter()
            .filter(|c| **c == camera)
            .count()
    }
}

#[async_trait]
impl FrameSource for MockFrameSource {
    async fn load_frame(&self, camera: CameraName) -> Result<Bytes, FrameError> {
        self.calls.lock().expect("call log poisoned").push(camera);

        if self.failing.contains(&camera) {
            return Err(FrameError::Read {
                path: camera.image_file_name().into(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "mock failure"),
            });
        }

        Ok(Self::frame_for(camera))
    }
}
