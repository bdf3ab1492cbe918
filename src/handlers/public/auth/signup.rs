// handlers/public/auth/signup.rs - POST /signup handler

use axum::extract::State;

use crate::auth::password::hash_password;
use crate::database::models::NewUser;
use crate::middleware::{ApiResponse, ApiResult, Created};
use crate::state::AppState;
use crate::validation::{JsonBody, SignupInput};

/// POST /signup - Create a new account
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",   // Required, unique, up to 80 characters
///   "password": "string",   // Required, up to 72 bytes
///   "user_type": "string"   // Required: manager | customer | admin
/// }
/// ```
///
/// Responds 201 with the new user's id, 400 on invalid input and 409 when
/// the username is taken. Uniqueness is decided by the store, so two
/// concurrent signups for one name cannot both succeed.
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<Created> {
    let input = SignupInput::from_json(&body)?;

    let password_hash = hash_password(input.password, state.config.security.bcrypt_cost).await?;

    let id = state
        .db
        .users()
        .create(&NewUser {
            username: input.username.clone(),
            password_hash,
            user_type: input.user_type,
        })
        .await?;

    tracing::info!(user_id = id, username = %input.username, role = %input.user_type, "user signed up");

    Ok(ApiResponse::created(Created {
        message: "User signed up successfully",
        id,
    }))
}
