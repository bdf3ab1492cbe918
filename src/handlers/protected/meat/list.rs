use axum::{extract::State, Extension};

use crate::database::models::MeatReading;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /meat_list - Every reading the caller has stored, oldest first
pub async fn list_readings(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<MeatReading>> {
    let readings = state.db.readings().list_for_user(user.user_id).await?;
    Ok(ApiResponse::success(readings))
}
