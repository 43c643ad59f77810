//! WebSocket adapters for the live operator link.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │   FrameBroadcaster │ TelemetryBroadcaster │ CommandRelay     │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ emit(ServerEvent)
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        SessionHub                            │
//! │   one broadcast channel, one receiver per connected client   │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//!                               │ ServerMessage (JSON text)
//!                               ▼
//!                    client-a   client-b   client-c
//! ```
//!
//! # Components
//!
//! - [`messages`] - WebSocket message protocol types
//! - [`hub`] - Client registry and event fan-out
//! - [`handler`] - Axum WebSocket upgrade handler

pub mod handler;
pub mod hub;
pub mod messages;

pub use handler::{websocket_router, ws_handler, GatewayState};
pub use hub::{ClientId, ClientInfo, SessionHub};
pub use messages::{CameraFrameMessage, ClientMessage, ServerMessage};
