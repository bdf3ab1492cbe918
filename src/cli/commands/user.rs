use anyhow::Context;
use serde_json::json;

use crate::auth::password::hash_password;
use crate::cli::utils::{field_errors_summary, output_error, output_success};
use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::models::NewUser;
use crate::database::DatabaseError;
use crate::state::AppState;
use crate::types::Role;
use crate::validation::SignupInput;

/// Create an account without going through `/signup`, typically the first
/// admin. Applies the same field rules as the HTTP endpoint.
pub async fn create(
    username: String,
    password: String,
    role: Role,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let input = match SignupInput::new(username, password, role) {
        Ok(input) => input,
        Err(errors) => {
            let summary = field_errors_summary(&errors.into_field_errors());
            output_error(output_format, &summary, Some("VALIDATION_ERROR"))?;
            anyhow::bail!("invalid user: {}", summary);
        }
    };

    let config = AppConfig::from_env();
    let cost = config.security.bcrypt_cost;
    let state = AppState::initialize(config)
        .await
        .context("failed to open database")?;

    let password_hash = hash_password(input.password, cost).await?;
    let result = state
        .db
        .users()
        .create(&NewUser {
            username: input.username.clone(),
            password_hash,
            user_type: input.user_type,
        })
        .await;
    state.shutdown().await;

    match result {
        Ok(id) => output_success(
            output_format,
            &format!("Created {} '{}' with id {}", input.user_type, input.username, id),
            Some(json!({ "id": id, "username": input.username, "user_type": input.user_type })),
        ),
        Err(DatabaseError::Conflict(message)) => {
            output_error(output_format, &message, Some("CONFLICT"))?;
            anyhow::bail!(message)
        }
        Err(e) => Err(e.into()),
    }
}
