//! Application layer - background broadcasters and the command relay.
//!
//! This layer orchestrates domain types and ports. The broadcasters own
//! their timing loops; the relay executes inbound commands.

pub mod command_relay;
pub mod frame_broadcaster;
pub mod telemetry_broadcaster;

pub use command_relay::CommandRelay;
pub use frame_broadcaster::{FrameBroadcaster, FrameBroadcasterConfig};
pub use telemetry_broadcaster::{TelemetryBroadcaster, TelemetryBroadcasterConfig};
