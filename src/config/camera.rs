//! Camera streaming configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::camera::CameraName;

/// Camera streaming configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CameraConfig {
    /// Directory holding `<camera_name>.jpg` files
    #[serde(default = "default_images_dir")]
    pub images_dir: PathBuf,

    /// Camera streamed at startup
    #[serde(default)]
    pub default_camera: CameraName,

    /// Delay between frames in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,

    /// JPEG re-encode quality (1-100)
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Whether clients may switch the active camera
    #[serde(default = "default_switchable")]
    pub switchable: bool,
}

impl CameraConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Validate camera configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frame_interval_ms == 0 {
            return Err(ValidationError::InvalidInterval("camera.frame_interval_ms"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ValidationError::InvalidJpegQuality(self.jpeg_quality));
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            images_dir: default_images_dir(),
            default_camera: CameraName::default(),
            frame_interval_ms: default_frame_interval_ms(),
            jpeg_quality: default_jpeg_quality(),
            switchable: default_switchable(),
        }
    }
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_frame_interval_ms() -> u64 {
    100
}

fn default_jpeg_quality() -> u8 {
    85
}

fn default_switchable() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_config_defaults() {
        let config = CameraConfig::default();
        assert_eq!(config.images_dir, PathBuf::from("static"));
        assert_eq!(config.default_camera, CameraName::FrontLeft);
        assert_eq!(config.frame_interval(), Duration::from_millis(100));
        assert_eq!(config.jpeg_quality, 85);
        assert!(config.switchable);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_interval() {
        let config = CameraConfig {
            frame_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_validation_jpeg_quality_bounds() {
        for quality in [0, 101, 255] {
            let config = CameraConfig {
                jpeg_quality: quality,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidJpegQuality(quality))
            );
        }

        for quality in [1, 100] {
            let config = CameraConfig {
                jpeg_quality: quality,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }
}
