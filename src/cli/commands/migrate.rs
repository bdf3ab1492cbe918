use anyhow::Context;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::state::AppState;

/// Connecting runs the schema migration; this command stops right after.
pub async fn handle(output_format: OutputFormat) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let url = config.database.url.clone();

    let state = AppState::initialize(config)
        .await
        .context("failed to migrate database")?;
    state.shutdown().await;

    output_success(
        output_format,
        &format!("Schema is up to date at {}", url),
        None,
    )
}
