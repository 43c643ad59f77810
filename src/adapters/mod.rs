//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `camera` - Frame sources (image files, mock)
//! - `telemetry` - Telemetry sources (static, live height)
//! - `events` - Test emitter
//! - `websocket` - Session gateway and wire protocol
//! - `http` - Router assembly and HTTP middleware

pub mod camera;
pub mod events;
pub mod http;
pub mod telemetry;
pub mod websocket;
