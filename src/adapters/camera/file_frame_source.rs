//! Frame source backed by static image files on disk.
//!
//! Each camera maps to `<images_dir>/<camera>.jpg`. The file is re-read and
//! re-encoded on every call so frames look like a live feed to the client.

use async_trait::async_trait;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use std::path::{Path, PathBuf};

use crate::domain::camera::CameraName;
use crate::ports::{FrameError, FrameSource};

/// Loads camera images from a directory and re-encodes them as JPEG.
#[derive(Debug, Clone)]
pub struct FileFrameSource {
    images_dir: PathBuf,
    jpeg_quality: u8,
}

impl FileFrameSource {
    pub fn new(images_dir: impl Into<PathBuf>, jpeg_quality: u8) -> Self {
        Self {
            images_dir: images_dir.into(),
            jpeg_quality,
        }
    }

    /// Path of the image resource backing `camera`.
    pub fn image_path(&self, camera: CameraName) -> PathBuf {
        self.images_dir.join(camera.image_file_name())
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }
}

#[async_trait]
impl FrameSource for FileFrameSource {
    async fn load_frame(&self, camera: CameraName) -> Result<Bytes, FrameError> {
        let path = self.image_path(camera);
        let raw = tokio::fs::read(&path)
            .await
            .map_err(|source| FrameError::Read { path, source })?;

        let quality = self.jpeg_quality;
        tokio::task::spawn_blocking(move || reencode_jpeg(camera, &raw, quality))
            .await
            .map_err(|e| FrameError::Task(e.to_string()))?
    }
}

/// Decodes an image and encodes it again as a JPEG at the given quality.
pub fn reencode_jpeg(camera: CameraName, raw: &[u8], quality: u8) -> Result<Bytes, FrameError> {
    let decoded = image::load_from_memory(raw).map_err(|e| FrameError::Decode {
        camera,
        message: e.to_string(),
    })?;

    // JPEG carries no alpha channel.
    let rgb = decoded.to_rgb8();

    let mut jpeg_bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);
    encoder
        .encode_image(&rgb)
        .map_err(|e| FrameError::Encode {
            camera,
            message: e.to_string(),
        })?;

    Ok(Bytes::from(jpeg_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage};

    fn write_fixture(dir: &Path, camera: CameraName) {
        let img: RgbImage = ImageBuffer::from_pixel(8, 8, Rgb([200, 40, 40]));
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, 90)
            .encode_image(&img)
            .unwrap();
        std::fs::write(dir.join(camera.image_file_name()), jpeg).unwrap();
    }

    #[test]
    fn image_path_joins_camera_file_name() {
        let source = FileFrameSource::new("static", 85);
        assert_eq!(
            source.image_path(CameraName::FrontRight),
            PathBuf::from("static/front_right.jpg")
        );
    }

    #[tokio::test]
    async fn load_frame_returns_jpeg_bytes() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path(), CameraName::Bottom);
        let source = FileFrameSource::new(dir.path(), 85);

        let frame = source.load_frame(CameraName::Bottom).await.unwrap();

        // JPEG SOI marker
        assert_eq!(&frame[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&frame).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (8, 8));
    }

    #[tokio::test]
    async fn missing_image_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileFrameSource::new(dir.path(), 85);

        let err = source.load_frame(CameraName::FrontLeft).await.unwrap_err();

        assert!(matches!(err, FrameError::Read { .. }));
        assert_eq!(err.kind(), crate::domain::foundation::ErrorKind::ResourceUnavailable);
    }

    #[tokio::test]
    async fn garbage_image_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("front_left.jpg"), b"not an image").unwrap();
        let source = FileFrameSource::new(dir.path(), 85);

        let err = source.load_frame(CameraName::FrontLeft).await.unwrap_err();

        assert!(matches!(err, FrameError::Decode { camera: CameraName::FrontLeft, .. }));
    }
}
