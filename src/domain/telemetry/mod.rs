//! Telemetry module - snapshot record and the mutable height value.

mod errors;
mod height;
mod snapshot;

pub use errors::TelemetryError;
pub use height::{Height, HeightAdjustment};
pub use snapshot::{Coordinates, MotorsHealth, SensorsState, TelemetrySnapshot};
