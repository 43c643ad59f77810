//! TelemetryBroadcaster - Periodic telemetry push to all clients.
//!
//! Runs for the lifetime of the process. The snapshot is built from the
//! configured `TelemetrySource` at every tick, so height changes made by
//! commands show up on the next tick.
//!
//! ## Graceful Shutdown
//!
//! `run` listens on a watch channel and returns once `true` is sent or the
//! sender is dropped.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use crate::domain::events::ServerEvent;
use crate::ports::{EventEmitter, TelemetrySource};

/// Configuration for the TelemetryBroadcaster.
#[derive(Debug, Clone)]
pub struct TelemetryBroadcasterConfig {
    /// How often a snapshot is emitted.
    pub interval: Duration,
}

impl Default for TelemetryBroadcasterConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
        }
    }
}

impl TelemetryBroadcasterConfig {
    /// Create config with custom interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }
}

/// Background service that emits `telemetry_data` events.
pub struct TelemetryBroadcaster {
    source: Arc<dyn TelemetrySource>,
    emitter: Arc<dyn EventEmitter>,
    config: TelemetryBroadcasterConfig,
}

impl TelemetryBroadcaster {
    /// Create a new TelemetryBroadcaster with default configuration.
    pub fn new(source: Arc<dyn TelemetrySource>, emitter: Arc<dyn EventEmitter>) -> Self {
        Self::with_config(source, emitter, TelemetryBroadcasterConfig::default())
    }

    /// Create a new TelemetryBroadcaster with custom configuration.
    pub fn with_config(
        source: Arc<dyn TelemetrySource>,
        emitter: Arc<dyn EventEmitter>,
        config: TelemetryBroadcasterConfig,
    ) -> Self {
        Self {
            source,
            emitter,
            config,
        }
    }

    /// Run the broadcast loop until shutdown signal is received.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            interval_ms = self.config.interval.as_millis() as u64,
            "Starting telemetry broadcast"
        );
        let mut interval = time::interval(self.config.interval);

        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        tracing::info!("Telemetry broadcast stopped");
                        return;
                    }
                }

                _ = interval.tick() => {
                    self.broadcast_once().await;
                }
            }
        }
    }

    /// Emit a single snapshot. Returns the number of sessions reached.
    pub async fn broadcast_once(&self) -> usize {
        let snapshot = self.source.snapshot().await;
        tracing::trace!(height = %snapshot.height, "Emitting telemetry");
        self.emitter.emit(ServerEvent::TelemetryData(snapshot))
    }
}
