//! Camera identity - the fixed set of streams a client may select.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::CameraError;

/// One of the rover's mock cameras.
///
/// Each camera is backed by a single static image named `<camera>.jpg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraName {
    #[default]
    FrontLeft,
    FrontRight,
    Bottom,
}

impl CameraName {
    /// All known cameras, in display order.
    pub const ALL: [CameraName; 3] = [
        CameraName::FrontLeft,
        CameraName::FrontRight,
        CameraName::Bottom,
    ];

    /// Wire name of the camera.
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraName::FrontLeft => "front_left",
            CameraName::FrontRight => "front_right",
            CameraName::Bottom => "bottom",
        }
    }

    /// File name of the image resource backing this camera.
    pub fn image_file_name(&self) -> String {
        format!("{}.jpg", self.as_str())
    }
}

impl fmt::Display for CameraName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CameraName {
    type Err = CameraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CameraName::ALL
            .into_iter()
            .find(|camera| camera.as_str() == s)
            .ok_or_else(|| CameraError::UnknownCamera(s.to_string()))
    }
}
