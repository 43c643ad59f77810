//! Session hub - the registry of connected clients and their shared feed.
//!
//! All clients see the same stream, so there is a single broadcast channel.
//! Each connection subscribes on join and drops its receiver on leave.
//!
//! ```text
//! FrameBroadcaster ─────┐                          ┌──► client-a
//! TelemetryBroadcaster ─┼──► SessionHub (broadcast) ┼──► client-b
//! CommandRelay ─────────┘                          └──► client-c
//! ```

use std::collections::HashMap;
use std::net::SocketAddr;

use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::domain::events::ServerEvent;
use crate::domain::foundation::Timestamp;
use crate::ports::EventEmitter;

/// Unique identifier for a WebSocket client connection.
///
/// Generated server-side when a client connects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(Uuid);

impl ClientId {
    /// Create a new random client ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ClientId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What the hub remembers about a connection.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub addr: SocketAddr,
    pub connected_at: Timestamp,
}

/// Fan-out point for every server event.
///
/// # Thread Safety
///
/// `emit` only touches the broadcast sender and never takes the registry
/// lock, so background loops are not blocked by joins and leaves.
pub struct SessionHub {
    sender: broadcast::Sender<ServerEvent>,
    clients: RwLock<HashMap<ClientId, ClientInfo>>,
}

impl SessionHub {
    /// Create a hub whose channel buffers `capacity` events per client.
    ///
    /// Clients that fall further behind skip the oldest events.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Create with default capacity (64 events).
    pub fn with_default_capacity() -> Self {
        Self::new(64)
    }

    /// Register a client and return its event feed.
    pub async fn join(&self, client_id: ClientId, addr: SocketAddr) -> broadcast::Receiver<ServerEvent> {
        let receiver = self.sender.subscribe();
        self.clients.write().await.insert(
            client_id,
            ClientInfo {
                addr,
                connected_at: Timestamp::now(),
            },
        );
        receiver
    }

    /// Remove a client. Returns what was recorded at join time.
    pub async fn leave(&self, client_id: &ClientId) -> Option<ClientInfo> {
        self.clients.write().await.remove(client_id)
    }

    /// Number of registered clients.
    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }

    /// Number of live receivers on the broadcast channel.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for SessionHub {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

impl EventEmitter for SessionHub {
    fn emit(&self, event: ServerEvent) -> usize {
        // No subscribers is not an error
        self.sender.send(event).unwrap_or(0)
    }
}
