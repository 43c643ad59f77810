//! HTTP adapters - router assembly and cross-cutting layers.
//!
//! The only route is the WebSocket upgrade; this module adds CORS and
//! request tracing around it.

use axum::http::HeaderValue;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::adapters::websocket::{websocket_router, GatewayState};

/// Build the application router.
///
/// An empty `cors_origins` allows any origin. Origins that are not valid
/// header values are skipped with a warning.
pub fn app_router(state: GatewayState, cors_origins: &[String]) -> Router {
    websocket_router()
        .with_state(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed = parse_origins(origins);
    if allowed.is_empty() {
        tracing::warn!(
            configured = origins.len(),
            "No valid CORS origin configured, allowing any origin"
        );
        return CorsLayer::permissive();
    }

    CorsLayer::new().allow_origin(AllowOrigin::list(allowed))
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect()
}
