use axum::extract::State;

use crate::database::models::ButcherShop;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /admin/shops - All registered butcher shops
pub async fn list_shops(State(state): State<AppState>) -> ApiResult<Vec<ButcherShop>> {
    let shops = state.db.shops().list_all().await?;
    Ok(ApiResponse::success(shops))
}
