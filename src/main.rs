use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rover_link::adapters::camera::FileFrameSource;
use rover_link::adapters::http::app_router;
use rover_link::adapters::telemetry::{LiveHeightTelemetry, StaticTelemetry};
use rover_link::adapters::websocket::{GatewayState, SessionHub};
use rover_link::application::{
    CommandRelay, FrameBroadcaster, FrameBroadcasterConfig, TelemetryBroadcaster,
    TelemetryBroadcasterConfig,
};
use rover_link::config::{AppConfig, TelemetryMode};
use rover_link::domain::telemetry::Height;
use rover_link::ports::TelemetrySource;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config);

    let addr = config.server.socket_addr()?;
    tracing::info!(
        %addr,
        images_dir = %config.camera.images_dir.display(),
        default_camera = %config.camera.default_camera,
        telemetry_mode = ?config.telemetry.mode,
        "Starting rover link"
    );

    let hub = Arc::new(SessionHub::new(config.server.broadcast_capacity));

    let frame_source = Arc::new(FileFrameSource::new(
        config.camera.images_dir.clone(),
        config.camera.jpeg_quality,
    ));
    let frames = Arc::new(FrameBroadcaster::with_config(
        frame_source,
        hub.clone(),
        FrameBroadcasterConfig::default()
            .with_frame_interval(config.camera.frame_interval())
            .with_default_camera(config.camera.default_camera)
            .with_switchable(config.camera.switchable),
    ));

    let initial_height = Height::clamped(config.telemetry.initial_height);
    let telemetry: Arc<dyn TelemetrySource> = match config.telemetry.mode {
        TelemetryMode::Static => Arc::new(StaticTelemetry::new(initial_height)),
        TelemetryMode::LiveHeight => Arc::new(LiveHeightTelemetry::new(
            initial_height,
            config.telemetry.height_step,
        )),
    };

    let telemetry_broadcaster = TelemetryBroadcaster::with_config(
        telemetry.clone(),
        hub.clone(),
        TelemetryBroadcasterConfig::default().with_interval(config.telemetry.interval()),
    );
    let relay = Arc::new(CommandRelay::new(frames.clone(), telemetry, hub.clone()));

    frames.start().await;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let telemetry_task = tokio::spawn(async move { telemetry_broadcaster.run(shutdown_rx).await });

    let app = app_router(
        GatewayState::new(hub, relay),
        &config.server.cors_origins_list(),
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Shutting down background tasks");
    // Receiver may already be gone if the task ended on its own
    let _ = shutdown_tx.send(true);
    if let Err(e) = telemetry_task.await {
        tracing::error!("Telemetry task failed: {}", e);
    }
    frames.shutdown().await;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
