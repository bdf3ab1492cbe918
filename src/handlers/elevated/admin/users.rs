use axum::extract::State;

use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /admin/users - All accounts, without password material
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Vec<User>> {
    let users = state.db.users().list_all().await?;
    Ok(ApiResponse::success(users))
}
