use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use presentoir_api::config::ServerConfig;
use presentoir_api::router::build_app_router;
use presentoir_api::state::AppState;
use presentoir_events::{EventBus, NotificationLog};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "presentoir_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_dir = %config.data_dir.display(),
        "Loaded server configuration"
    );

    // --- Storage ---
    presentoir_db::health_check(&config.data_dir)
        .await
        .expect("Data directory is not usable");
    tracing::info!("Data directory health check passed");

    // --- Event bus ---
    let event_bus = Arc::new(EventBus::default());
    let notifier_handle = tokio::spawn(NotificationLog::run(event_bus.subscribe()));

    // --- App state ---
    let state = AppState::open(config.clone(), Arc::clone(&event_bus))
        .await
        .expect("Failed to open stores");
    tracing::info!("Stores opened");

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // --- Post-shutdown cleanup ---
    tracing::info!("Server stopped accepting connections, cleaning up");

    // The router (and its clone of the bus) is gone; dropping ours closes
    // the channel so the notification log drains and exits.
    drop(event_bus);
    match tokio::time::timeout(Duration::from_secs(5), notifier_handle).await {
        Ok(Ok(delivered)) => tracing::info!(delivered, "Notification log stopped"),
        Ok(Err(e)) => tracing::error!(error = %e, "Notification log task failed"),
        Err(_) => tracing::warn!("Notification log did not stop in time"),
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
