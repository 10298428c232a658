//! Stopwatch - Serve a single monotonic stopwatch over HTTP
//!
//! This is the main entry point for the stopwatch server.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use stopwatch::{
    api::create_router,
    config::Config,
    state::AppState,
    tasks::progress_report_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatch={},tower_http=info", config.log_level()))
        .init();

    info!("Starting stopwatch server v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, report_interval={}s",
          config.host, config.port, config.report_interval);

    let state = Arc::new(AppState::new(config.port, config.host.clone()));

    if let Some(period) = config.report_period() {
        let report_state = Arc::clone(&state);
        tokio::spawn(async move {
            progress_report_task(report_state, period).await;
        });
    }

    let app = create_router(state);

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start  - Start or restart the stopwatch");
    info!("  POST /stop   - Stop the stopwatch");
    info!("  POST /reset  - Put the stopwatch on hold");
    info!("  GET  /status - Current stopwatch and server status");
    info!("  GET  /health - Health check");

    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
