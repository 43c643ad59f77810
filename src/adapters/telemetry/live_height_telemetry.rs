//! Telemetry source with a mutable, shared height.
//!
//! The height is read at snapshot time, so a `button_press` is visible in
//! the very next `telemetry_data` tick.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::telemetry::{Height, HeightAdjustment, TelemetryError, TelemetrySnapshot};
use crate::ports::TelemetrySource;

/// Telemetry whose height is adjusted by client commands.
#[derive(Debug)]
pub struct LiveHeightTelemetry {
    height: RwLock<Height>,
    step: f64,
}

impl LiveHeightTelemetry {
    pub fn new(initial: Height, step: f64) -> Self {
        Self {
            height: RwLock::new(initial),
            step,
        }
    }
}

impl Default for LiveHeightTelemetry {
    fn default() -> Self {
        Self::new(Height::ZERO, Height::DEFAULT_STEP)
    }
}

#[async_trait]
impl TelemetrySource for LiveHeightTelemetry {
    async fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::fabricated(*self.height.read().await)
    }

    async fn height(&self) -> Height {
        *self.height.read().await
    }

    async fn adjust_height(&self, adjustment: HeightAdjustment) -> Result<Height, TelemetryError> {
        // Read-modify-write under one write guard so concurrent presses never lose a step.
        let mut height = self.height.write().await;
        *height = height.adjusted(adjustment, self.step);
        Ok(*height)
    }
}
