use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{Database, DatabaseError};

/// Everything a handler needs, built once in `main` and cloned per request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Connect to the configured store and make sure the schema exists.
    pub async fn initialize(config: AppConfig) -> Result<Self, DatabaseError> {
        let db = Database::connect(&config.database).await?;
        db.migrate().await?;

        Ok(Self {
            db,
            config: Arc::new(config),
        })
    }

    pub async fn shutdown(&self) {
        self.db.close().await;
    }
}
