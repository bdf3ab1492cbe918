// handlers/protected/shop.rs - POST /register_shop handler

use axum::{extract::State, Extension};

use crate::database::models::NewButcherShop;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, Created};
use crate::state::AppState;
use crate::validation::{JsonBody, ShopInput};

/// POST /register_shop - Register a butcher shop owned by the calling manager
///
/// Expected Input:
/// ```json
/// {
///   "name": "string",       // Required
///   "location": "string",   // Required
///   "contact": "string",    // Optional
///   "manager_id": 1         // Optional, ignored
/// }
/// ```
///
/// The owning manager is always the token's user. A `manager_id` in the body
/// that disagrees is logged and dropped.
pub async fn register_shop(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<Created> {
    let input = ShopInput::from_json(&body)?;

    if let Some(claimed) = input.manager_id.filter(|id| *id != user.user_id) {
        tracing::warn!(
            user_id = user.user_id,
            claimed_manager_id = claimed,
            "ignoring manager_id that does not match the caller"
        );
    }

    let id = state
        .db
        .shops()
        .create(&NewButcherShop {
            name: input.name,
            location: input.location,
            contact: input.contact,
            manager_id: user.user_id,
        })
        .await?;

    tracing::info!(shop_id = id, manager_id = user.user_id, "butcher shop registered");

    Ok(ApiResponse::created(Created {
        message: "Butcher shop registered successfully",
        id,
    }))
}
