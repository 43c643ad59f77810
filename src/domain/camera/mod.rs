//! Camera module - stream identities and selection errors.

mod camera_name;
mod errors;

pub use camera_name::CameraName;
pub use errors::CameraError;
