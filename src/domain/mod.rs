//! Domain layer containing the rover gateway's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, error classification)
//! - `camera` - Stream identities and selection errors
//! - `telemetry` - Snapshot record and the adjustable height
//! - `command` - Inbound client commands and payload decoding
//! - `events` - Outbound events pushed to clients

pub mod camera;
pub mod command;
pub mod events;
pub mod foundation;
pub mod telemetry;
