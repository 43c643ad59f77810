//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application services and the outside world. Adapters implement them.
//!
//! - `EventEmitter` - Broadcast of outbound events to connected clients
//! - `FrameSource` - Loading and encoding camera frames
//! - `TelemetrySource` - Snapshot strategy (static or mutable height)

mod event_emitter;
mod frame_source;
mod telemetry_source;

pub use event_emitter::EventEmitter;
pub use frame_source::{FrameError, FrameSource};
pub use telemetry_source::TelemetrySource;
