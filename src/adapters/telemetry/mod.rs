//! Telemetry source adapters.
//!
//! - `StaticTelemetry` - Fixed snapshot, height cannot change
//! - `LiveHeightTelemetry` - Height adjusted by `button_press` commands

mod live_height_telemetry;
mod static_telemetry;

pub use live_height_telemetry::LiveHeightTelemetry;
pub use static_telemetry::StaticTelemetry;
