// handlers/protected/meat/quality.rs - POST /calculate_quality handler

use axum::{extract::State, Extension};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::services::degradation_percent;
use crate::state::AppState;
use crate::validation::{JsonBody, ReadingInput};

#[derive(Debug, Serialize)]
pub struct QualityResponse {
    pub quality_degradation: f64,
}

/// POST /calculate_quality - Compare a fresh reading with the last stored one
///
/// Takes the same body as `/meat_data`. The baseline is the caller's most
/// recent stored reading for the same shop and part; nothing is written.
/// `purchase_date` is validated but plays no part in the lookup.
pub async fn calculate_quality(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    JsonBody(body): JsonBody,
) -> ApiResult<QualityResponse> {
    let input = ReadingInput::from_json(&body)?;

    let previous = state
        .db
        .readings()
        .latest_for(user.user_id, input.butcher_shop_id, &input.part)
        .await?
        .ok_or_else(|| ApiError::not_found("No previous data found for this meat"))?;

    let quality_degradation = degradation_percent(previous.impedance, input.impedance)?;

    tracing::debug!(
        user_id = user.user_id,
        baseline_id = previous.id,
        quality_degradation,
        "quality computed"
    );

    Ok(ApiResponse::success(QualityResponse { quality_degradation }))
}
