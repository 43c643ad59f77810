//! Camera frame source adapters.
//!
//! - `FileFrameSource` - Static JPEG files re-encoded on every tick
//! - `MockFrameSource` - In-memory frames for testing

mod file_frame_source;
mod mock_frame_source;

pub use file_frame_source::{reencode_jpeg, FileFrameSource};
pub use mock_frame_source::MockFrameSource;
