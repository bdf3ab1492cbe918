use anyhow::Context;

use crate::config::AppConfig;
use crate::state::AppState;

pub async fn handle() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    config.validate()?;
    tracing::info!("Starting Meat Freshness API in {:?} mode", config.environment);

    let bind_addr = config.bind_addr();
    let state = AppState::initialize(config)
        .await
        .context("failed to initialize database")?;

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, crate::app(state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    state.shutdown().await;
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
