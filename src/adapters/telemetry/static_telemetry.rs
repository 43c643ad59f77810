//! Telemetry source that reports the same snapshot forever.

use async_trait::async_trait;

use crate::domain::telemetry::{Height, HeightAdjustment, TelemetryError, TelemetrySnapshot};
use crate::ports::TelemetrySource;

/// Constant telemetry; the height cannot be changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticTelemetry {
    height: Height,
}

impl StaticTelemetry {
    pub fn new(height: Height) -> Self {
        Self { height }
    }
}

#[async_trait]
impl TelemetrySource for StaticTelemetry {
    async fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::fabricated(self.height)
    }

    async fn height(&self) -> Height {
        self.height
    }

    async fn adjust_height(&self, _adjustment: HeightAdjustment) -> Result<Height, TelemetryError> {
        Err(TelemetryError::HeightFixed)
    }
}
