/// Axum webserver lifecycle: bind, serve, graceful shutdown
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::{
    config::AdvisorConfig,
    errors::AdvisorError,
    logger::{self, LogTag},
    webserver::{routes, state::AppState},
};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// Blocks until Ctrl-C or `shutdown()`.
pub async fn start_server(config: AdvisorConfig) -> Result<(), AdvisorError> {
    let addr = config.bind_addr()?;
    let state = Arc::new(AppState::new(config)?);
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::AddrInUse => AdvisorError::Config(format!(
            "Failed to bind to {}: Address already in use (set PORT or --port)",
            addr
        )),
        std::io::ErrorKind::PermissionDenied => AdvisorError::Config(format!(
            "Failed to bind to {}: Permission denied, use a port above 1024",
            addr
        )),
        _ => AdvisorError::Config(format!("Failed to bind to {}: {}", addr, e)),
    })?;

    logger::info(
        LogTag::Webserver,
        &format!("Server running on http://{}", addr),
    );

    let shutdown_signal = async {
        tokio::select! {
            _ = SHUTDOWN_NOTIFY.notified() => {}
            _ = tokio::signal::ctrl_c() => {}
        }
        logger::info(
            LogTag::Webserver,
            "Received shutdown signal, stopping webserver...",
        );
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| AdvisorError::Unexpected(format!("Server error: {}", e)))?;

    logger::info(LogTag::Webserver, "Webserver stopped gracefully");
    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    logger::debug(LogTag::Webserver, "Triggering webserver shutdown...");
    SHUTDOWN_NOTIFY.notify_one();
}

/// Router with all routes and middleware
pub fn build_app(state: Arc<AppState>) -> Router {
    routes::create_router(state).layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
}
