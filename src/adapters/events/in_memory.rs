//! In-memory event emitter implementation for testing.
//!
//! Captures every emitted event so tests can assert on what clients would
//! have received, without opening sockets.
//!
//! # Security Note
//!
//! This adapter is for **testing only** and should not be used in production.
//! It uses `.expect()` on lock operations which will panic if locks are poisoned.
//! Production code should use the WebSocket `SessionHub`.

use std::sync::RwLock;

use crate::domain::camera::CameraName;
use crate::domain::events::ServerEvent;
use crate::ports::EventEmitter;

/// In-memory emitter for testing.
///
/// Features:
/// - Synchronous capture (deterministic for tests)
/// - Filters by event name and camera
///
/// # Panics
///
/// Methods may panic if internal locks are poisoned. This is acceptable
/// for test code but this adapter should NOT be used in production.
///
/// # Example
///
/// ```ignore
/// let emitter = Arc::new(InMemoryEmitter::new());
/// relay.handle(command).await;
/// assert_eq!(emitter.count_named("camera_status"), 1);
/// ```
pub struct InMemoryEmitter {
    emitted: RwLock<Vec<ServerEvent>>,
}

impl InMemoryEmitter {
    /// Creates a new empty emitter.
    pub fn new() -> Self {
        Self {
            emitted: RwLock::new(Vec::new()),
        }
    }

    // === Test Helpers ===

    /// Returns all emitted events (for test assertions).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events(&self) -> Vec<ServerEvent> {
        self.emitted
            .read()
            .expect("InMemoryEmitter: emitted lock poisoned")
            .clone()
    }

    /// Returns events with the given wire name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn events_named(&self, name: &str) -> Vec<ServerEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.name() == name)
            .collect()
    }

    /// Returns count of events with the given wire name.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn count_named(&self, name: &str) -> usize {
        self.emitted
            .read()
            .expect("InMemoryEmitter: emitted lock poisoned")
            .iter()
            .filter(|e| e.name() == name)
            .count()
    }

    /// Returns the camera of every `camera_frame` event, in emission order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn frame_cameras(&self) -> Vec<CameraName> {
        self.emitted
            .read()
            .expect("InMemoryEmitter: emitted lock poisoned")
            .iter()
            .filter_map(|e| match e {
                ServerEvent::CameraFrame(frame) => Some(frame.camera_name),
                _ => None,
            })
            .collect()
    }

    /// Clears all captured events (for test isolation).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear(&self) {
        self.emitted
            .write()
            .expect("InMemoryEmitter: emitted write lock poisoned")
            .clear();
    }

    /// Returns count of emitted events.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn event_count(&self) -> usize {
        self.emitted
            .read()
            .expect("InMemoryEmitter: emitted lock poisoned")
            .len()
    }
}

impl Default for InMemoryEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl EventEmitter for InMemoryEmitter {
    fn emit(&self, event: ServerEvent) -> usize {
        self.emitted
            .write()
            .expect("InMemoryEmitter: emitted write lock poisoned")
            .push(event);
        1
    }
}
