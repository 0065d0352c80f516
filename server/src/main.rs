//! Option Lists Server Entry Point

use tokio::net::TcpListener;

use option_lists_server::{create_router, shared_state, AppConfig};

const DEFAULT_LOG_FILTER: &str = "info,option_lists_server=debug,tower_http=debug";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    rolling_logger::init_logger(&config.log_dir, "option-lists", DEFAULT_LOG_FILTER)?;

    let state = shared_state().await?;
    let bind_address = state.config.bind_address();
    tracing::info!(
        data_dir = %state.config.data_dir.display(),
        lists = ?state.config.lists.names().collect::<Vec<_>>(),
        "configuration loaded"
    );

    let app = create_router(state);
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{bind_address}");
    tracing::info!("  GET  /api/lists/{{name}}   - read list");
    tracing::info!("  POST /api/lists/{{name}}   - append if absent");
    tracing::info!("  GET  /data-files/{{file}}  - raw list files");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
