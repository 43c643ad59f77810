//! TelemetrySource port - pluggable strategy producing telemetry snapshots.

use async_trait::async_trait;

use crate::domain::telemetry::{Height, HeightAdjustment, TelemetryError, TelemetrySnapshot};

/// Strategy that produces the snapshot broadcast every telemetry tick.
///
/// Sources either report fixed values or keep a mutable height that
/// `button_press` commands adjust.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Builds the snapshot for the current tick.
    async fn snapshot(&self) -> TelemetrySnapshot;

    /// Current height without building a full snapshot.
    async fn height(&self) -> Height;

    /// Applies an adjustment and returns the height after the update.
    ///
    /// # Errors
    ///
    /// Returns `TelemetryError::HeightFixed` if this source does not
    /// support a mutable height.
    async fn adjust_height(&self, adjustment: HeightAdjustment) -> Result<Height, TelemetryError>;
}
