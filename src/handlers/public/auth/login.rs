// handlers/public/auth/login.rs - POST /login handler

use axum::extract::State;
use serde::Serialize;

use crate::auth::password::{verify_decoy, verify_password};
use crate::auth::{generate_jwt, Claims};
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::validation::{JsonBody, LoginInput};

const BAD_CREDENTIALS: &str = "Bad username or password";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: u64,
}

/// POST /login - Authenticate and receive an access token
///
/// Expected Input:
/// ```json
/// {
///   "username": "string",
///   "password": "string"
/// }
/// ```
///
/// Expected Output (Success):
/// ```json
/// {
///   "access_token": "eyJhbGciOiJIUzI1NiI...",
///   "token_type": "Bearer",
///   "expires_in": 604800
/// }
/// ```
///
/// Unknown usernames and wrong passwords get the same 401 response, and both
/// pay for one bcrypt verification.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<LoginResponse> {
    let input = LoginInput::from_json(&body)?;

    let Some(user) = state.db.users().find_by_username(&input.username).await? else {
        verify_decoy(input.password, state.config.security.bcrypt_cost).await?;
        tracing::warn!(username = %input.username, "login failed: unknown user");
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    };

    if !verify_password(input.password, user.password_hash.clone()).await? {
        tracing::warn!(user_id = user.id, "login failed: wrong password");
        return Err(ApiError::unauthorized(BAD_CREDENTIALS));
    }

    let security = &state.config.security;
    let claims = Claims::new(user.id, user.user_type, security.jwt_expiry_hours);
    let access_token = generate_jwt(&claims, &security.jwt_secret)?;

    tracing::info!(user_id = user.id, role = %user.user_type, "user logged in");

    Ok(ApiResponse::success(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: claims.exp.saturating_sub(claims.iat).max(0) as u64,
    }))
}
