//! Telemetry configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    /// Which telemetry source backs the snapshots
    #[serde(default)]
    pub mode: TelemetryMode,

    /// Delay between `telemetry_data` events in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Starting height in meters
    #[serde(default)]
    pub initial_height: f64,

    /// Height change per button press in meters
    #[serde(default = "default_height_step")]
    pub height_step: f64,
}

/// Telemetry source selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TelemetryMode {
    /// Fixed snapshot, height cannot change
    Static,
    /// Height adjustable through `button_press`
    #[default]
    LiveHeight,
}

impl TelemetryConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Validate telemetry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.interval_ms == 0 {
            return Err(ValidationError::InvalidInterval("telemetry.interval_ms"));
        }
        if !self.initial_height.is_finite() || self.initial_height < 0.0 {
            return Err(ValidationError::InvalidInitialHeight);
        }
        if !self.height_step.is_finite() || self.height_step <= 0.0 {
            return Err(ValidationError::InvalidHeightStep);
        }
        Ok(())
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            mode: TelemetryMode::default(),
            interval_ms: default_interval_ms(),
            initial_height: 0.0,
            height_step: default_height_step(),
        }
    }
}

fn default_interval_ms() -> u64 {
    1000
}

fn default_height_step() -> f64 {
    0.5
}
