//! Telemetry snapshot - the record pushed to clients once per tick.
//!
//! Everything except `height` is fabricated and constant; the browser client
//! only animates the height gauge.

use serde::{Deserialize, Serialize};

use super::height::Height;

/// One telemetry record as sent in a `telemetry_data` event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetrySnapshot {
    pub height: Height,
    pub speed: f64,
    pub battery: u8,
    pub coordinates: Coordinates,
    pub motors_health: MotorsHealth,
    pub sensors_state: SensorsState,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Health flag per motor: left/right front, left/right rear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct MotorsHealth {
    pub lf: bool,
    pub rf: bool,
    pub lr: bool,
    pub rr: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorsState {
    pub humidity: f64,
    pub brightness: f64,
    pub units_count: u32,
}

impl TelemetrySnapshot {
    /// Builds the fabricated snapshot around the given height.
    pub fn fabricated(height: Height) -> Self {
        Self {
            height,
            speed: 1.0,
            battery: 98,
            coordinates: Coordinates {
                lat: 50.450079,
                lon: 30.4533602,
            },
            motors_health: MotorsHealth {
                lf: true,
                rf: true,
                lr: false,
                rr: true,
            },
            sensors_state: SensorsState {
                humidity: 70.1,
                brightness: 59.8,
                units_count: 1,
            },
        }
    }
}
