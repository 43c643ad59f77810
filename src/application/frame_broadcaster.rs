//! FrameBroadcaster - Background stream of camera frames to all clients.
//!
//! Exactly one frame loop runs at a time. Switching cameras cancels the
//! running loop, waits for it to finish, and only then starts the loop for
//! the new camera, so two loops never emit concurrently.
//!
//! ## Configuration
//!
//! | Setting | Default | Description |
//! |---------|---------|-------------|
//! | `frame_interval` | 100ms | Delay between frames |
//! | `default_camera` | `front_left` | Camera streamed at startup |
//! | `switchable` | true | Whether clients may change the camera |

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::domain::camera::{CameraError, CameraName};
use crate::domain::events::{CameraFrame, ServerEvent};
use crate::ports::{EventEmitter, FrameSource};

/// Configuration for the FrameBroadcaster.
#[derive(Debug, Clone)]
pub struct FrameBroadcasterConfig {
    /// Delay between two frames of the same loop.
    pub frame_interval: Duration,

    /// Camera streamed when the broadcaster starts.
    pub default_camera: CameraName,

    /// Whether `switch_to` is allowed.
    pub switchable: bool,
}

impl Default for FrameBroadcasterConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(100),
            default_camera: CameraName::default(),
            switchable: true,
        }
    }
}

impl FrameBroadcasterConfig {
    /// Create config with custom frame interval.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Create config with a different startup camera.
    pub fn with_default_camera(mut self, camera: CameraName) -> Self {
        self.default_camera = camera;
        self
    }

    /// Create config with switching enabled or disabled.
    pub fn with_switchable(mut self, switchable: bool) -> Self {
        self.switchable = switchable;
        self
    }
}

/// Handle to a running frame loop.
struct StreamTask {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl StreamTask {
    /// Cancels the loop and waits until it has fully stopped.
    async fn stop(self, camera: CameraName) {
        self.cancel.cancel();
        if let Err(e) = self.handle.await {
            if e.is_panic() {
                tracing::error!(camera = %camera, "Camera stream task panicked: {}", e);
            }
        }
    }

    fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

/// Active camera plus the loop streaming it. Guarded by a mutex.
struct ActiveStream {
    camera: CameraName,
    task: Option<StreamTask>,
}

/// Everything a frame loop needs, cloneable into detached tasks.
#[derive(Clone)]
struct LoopSpawner {
    source: Arc<dyn FrameSource>,
    emitter: Arc<dyn EventEmitter>,
    frame_interval: Duration,
}

impl LoopSpawner {
    fn spawn(&self, camera: CameraName) -> StreamTask {
        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run_frame_loop(
            camera,
            self.source.clone(),
            self.emitter.clone(),
            self.frame_interval,
            cancel.clone(),
        ));
        StreamTask { cancel, handle }
    }
}

/// Streams frames of the active camera to every connected client.
pub struct FrameBroadcaster {
    spawner: LoopSpawner,
    config: FrameBroadcasterConfig,
    active: Arc<Mutex<ActiveStream>>,
}

impl FrameBroadcaster {
    /// Create a new FrameBroadcaster with default configuration.
    pub fn new(source: Arc<dyn FrameSource>, emitter: Arc<dyn EventEmitter>) -> Self {
        Self::with_config(source, emitter, FrameBroadcasterConfig::default())
    }

    /// Create a new FrameBroadcaster with custom configuration.
    pub fn with_config(
        source: Arc<dyn FrameSource>,
        emitter: Arc<dyn EventEmitter>,
        config: FrameBroadcasterConfig,
    ) -> Self {
        let active = ActiveStream {
            camera: config.default_camera,
            task: None,
        };
        Self {
            spawner: LoopSpawner {
                source,
                emitter,
                frame_interval: config.frame_interval,
            },
            config,
            active: Arc::new(Mutex::new(active)),
        }
    }

    /// Starts streaming the active camera.
    ///
    /// No-op if a loop is already running. A loop that ended on a frame
    /// error is replaced.
    pub async fn start(&self) {
        let mut active = self.active.lock().await;
        if active.task.as_ref().is_some_and(StreamTask::is_running) {
            return;
        }
        active.task = Some(self.spawner.spawn(active.camera));
    }

    /// Replaces the running loop with one streaming `camera`.
    ///
    /// The previous loop is cancelled and awaited while the lock is held, so
    /// concurrent switches are serialized and never overlap. The swap runs
    /// in its own task: dropping or aborting the caller mid-switch still
    /// leaves a loop running for the new camera.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::SwitchingDisabled` if the broadcaster was
    /// configured as not switchable. The running loop is left untouched.
    pub async fn switch_to(&self, camera: CameraName) -> Result<(), CameraError> {
        if !self.config.switchable {
            tracing::warn!(camera = %camera, "Camera switch requested but switching is disabled");
            return Err(CameraError::SwitchingDisabled);
        }

        let active = self.active.clone();
        let spawner = self.spawner.clone();
        let swap = tokio::spawn(async move {
            let mut active = active.lock().await;
            let previous = active.camera;

            if let Some(task) = active.task.take() {
                task.stop(previous).await;
            }

            active.camera = camera;
            active.task = Some(spawner.spawn(camera));

            tracing::info!(from = %previous, to = %camera, "Switched camera stream");
        });

        if let Err(e) = swap.await {
            if e.is_panic() {
                std::panic::resume_unwind(e.into_panic());
            }
        }
        Ok(())
    }

    /// Camera currently selected for streaming.
    pub async fn active_camera(&self) -> CameraName {
        self.active.lock().await.camera
    }

    /// Whether a frame loop is currently running.
    ///
    /// Returns false after a loop stopped on a frame error.
    pub async fn is_streaming(&self) -> bool {
        self.active
            .lock()
            .await
            .task
            .as_ref()
            .is_some_and(StreamTask::is_running)
    }

    /// Stops the running loop, if any, and waits for it to finish.
    pub async fn shutdown(&self) {
        let mut active = self.active.lock().await;
        let camera = active.camera;
        if let Some(task) = active.task.take() {
            task.stop(camera).await;
            tracing::info!(camera = %camera, "Camera stream stopped");
        }
    }
}

/// Emits a frame for `camera` every `frame_interval` until cancelled.
///
/// A frame error ends the loop; it is logged and not retried.
async fn run_frame_loop(
    camera: CameraName,
    source: Arc<dyn FrameSource>,
    emitter: Arc<dyn EventEmitter>,
    frame_interval: Duration,
    cancel: CancellationToken,
) {
    tracing::info!(camera = %camera, "Starting camera stream");

    let mut ticker = time::interval(frame_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            result = source.load_frame(camera) => result,
        };

        match result {
            Ok(frame) => {
                emitter.emit(ServerEvent::CameraFrame(CameraFrame {
                    camera_name: camera,
                    frame,
                }));
            }
            Err(e) => {
                tracing::error!(
                    camera = %camera,
                    error_kind = %e.kind(),
                    "Error in camera stream, stopping: {}",
                    e
                );
                return;
            }
        }
    }

    tracing::debug!(camera = %camera, "Camera stream cancelled");
}
