//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and error classification used across the
//! camera, telemetry and command modules.

mod errors;
mod timestamp;

pub use errors::ErrorKind;
pub use timestamp::Timestamp;
