// handlers/protected/meat/data.rs - POST /meat_data handler

use axum::{extract::State, Extension};
use chrono::Utc;

use crate::database::models::NewMeatReading;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser, Created};
use crate::state::AppState;
use crate::validation::{JsonBody, ReadingInput};

/// POST /meat_data - Store an impedance reading
///
/// Expected Input:
/// ```json
/// {
///   "impedance": 123.4,                        // Required, finite number
///   "purchase_date": "2024-05-01T10:00:00Z",   // Required, ISO-8601
///   "butcher_shop_id": 1,                      // Required, existing shop
///   "part": "sirloin"                          // Required
/// }
/// ```
///
/// The reading belongs to the caller and is stamped with the server clock.
pub async fn store_reading(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<Created> {
    let input = ReadingInput::from_json(&body)?;

    if !state.db.shops().exists(input.butcher_shop_id).await? {
        return Err(ApiError::field_error("butcher_shop_id", "Unknown butcher shop."));
    }

    let id = state
        .db
        .readings()
        .create(&NewMeatReading {
            user_id: user.user_id,
            butcher_shop_id: input.butcher_shop_id,
            impedance: input.impedance,
            purchase_date: input.purchase_date,
            part: input.part,
            store_date: Utc::now(),
        })
        .await?;

    tracing::info!(
        reading_id = id,
        user_id = user.user_id,
        shop_id = input.butcher_shop_id,
        "meat reading stored"
    );

    Ok(ApiResponse::created(Created {
        message: "Meat data stored successfully",
        id,
    }))
}
