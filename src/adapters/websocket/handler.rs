//! WebSocket upgrade handler for operator connections.
//!
//! Handles the HTTP → WebSocket upgrade and manages the connection lifecycle:
//! 1. Upgrade to WebSocket
//! 2. Register with the session hub
//! 3. Send `connection_status` to this client only
//! 4. Forward hub events out and relay inbound commands until disconnect
//! 5. Deregister and log the session duration

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        ConnectInfo, State,
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;

use crate::application::CommandRelay;
use crate::domain::command::CommandError;
use crate::domain::events::{ConnectionStatus, ServerEvent};

use super::{
    hub::{ClientId, SessionHub},
    messages::{ClientMessage, ServerMessage},
};

/// State required for WebSocket handling.
#[derive(Clone)]
pub struct GatewayState {
    pub hub: Arc<SessionHub>,
    pub relay: Arc<CommandRelay>,
}

impl GatewayState {
    pub fn new(hub: Arc<SessionHub>, relay: Arc<CommandRelay>) -> Self {
        Self { hub, relay }
    }
}

/// Handle WebSocket upgrade requests.
///
/// Route: `GET /ws`
///
/// No authentication; every client receives the same stream.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<GatewayState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, addr, state))
}

/// Handle an established WebSocket connection.
async fn handle_socket(socket: WebSocket, addr: SocketAddr, state: GatewayState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = ClientId::new();

    let mut hub_rx = state.hub.join(client_id, addr).await;
    tracing::info!(client_id = %client_id, %addr, "Client connected");

    let connected = ServerMessage::from(ServerEvent::ConnectionStatus(ConnectionStatus::connected()));
    if let Err(e) = send_message(&mut sender, &connected).await {
        tracing::debug!(client_id = %client_id, "Failed to send connection status: {}", e);
        finish(&state.hub, client_id).await;
        return;
    }

    // Forward hub events to this client
    let mut send_task = tokio::spawn(async move {
        loop {
            match hub_rx.recv().await {
                Ok(event) => {
                    let msg = ServerMessage::from(event);
                    if let Err(e) = send_message(&mut sender, &msg).await {
                        tracing::debug!(
                            client_id = %client_id,
                            "Send error, closing connection: {}",
                            e
                        );
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(client_id = %client_id, skipped, "Client lagging, events skipped");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Relay commands from this client
    let relay = state.relay.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            match result {
                Ok(Message::Text(text)) => dispatch(&relay, client_id, &text).await,
                Ok(Message::Binary(_)) => {
                    tracing::warn!(
                        client_id = %client_id,
                        "Received unsupported binary message"
                    );
                }
                Ok(Message::Ping(_)) | Ok(Message::Pong(_)) => {
                    // Protocol-level, answered by axum
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!(client_id = %client_id, "Client sent close frame");
                    break;
                }
                Err(e) => {
                    tracing::debug!(client_id = %client_id, "Receive error: {}", e);
                    break;
                }
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    finish(&state.hub, client_id).await;
}

/// Parse one text frame and run the command it names.
async fn dispatch(relay: &CommandRelay, client_id: ClientId, text: &str) {
    let command = match serde_json::from_str::<ClientMessage>(text)
        .map_err(CommandError::from)
        .and_then(ClientMessage::into_command)
    {
        Ok(command) => command,
        Err(CommandError::UnknownEvent(event)) => {
            tracing::warn!(client_id = %client_id, %event, "Ignoring unknown event");
            return;
        }
        Err(e) => {
            tracing::warn!(client_id = %client_id, "Ignoring malformed message: {}", e);
            return;
        }
    };

    let event = command.event_name();
    if let Err(e) = relay.handle(command).await {
        tracing::debug!(
            client_id = %client_id,
            event,
            error_kind = %e.kind(),
            "Command rejected: {}",
            e
        );
    }
}

async fn finish(hub: &SessionHub, client_id: ClientId) {
    match hub.leave(&client_id).await {
        Some(info) => {
            tracing::info!(
                client_id = %client_id,
                addr = %info.addr,
                duration_ms = info.connected_at.elapsed().num_milliseconds(),
                "Client disconnected"
            );
        }
        None => tracing::debug!(client_id = %client_id, "Client already removed"),
    }
}

/// Send a JSON message over the WebSocket.
async fn send_message(
    sender: &mut futures::stream::SplitSink<WebSocket, Message>,
    msg: &ServerMessage,
) -> Result<(), axum::Error> {
    let json = msg.to_json().map_err(axum::Error::new)?;
    sender.send(Message::Text(json)).await
}

/// Create axum router for the WebSocket endpoint.
///
/// Must be served with `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn websocket_router() -> axum::Router<GatewayState> {
    use axum::routing::get;

    axum::Router::new().route("/ws", get(ws_handler))
}
