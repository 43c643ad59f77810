//! EventEmitter port - fan-out of outbound events to every connected client.

use crate::domain::events::ServerEvent;

/// Sink that delivers an event to all connected sessions.
///
/// Emission is fire-and-forget: implementations must not block the caller
/// and must treat "nobody is connected" as success.
pub trait EventEmitter: Send + Sync {
    /// Broadcasts the event. Returns the number of sessions it was queued for.
    fn emit(&self, event: ServerEvent) -> usize;
}
