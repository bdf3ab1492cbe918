use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET / - Service descriptor
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "name": "Meat Freshness API",
        "version": version,
        "description": "Impedance-based meat freshness tracking for customers, butcher shops and admins",
        "endpoints": {
            "signup": "POST /signup (public)",
            "login": "POST /login (public - token acquisition)",
            "register_shop": "POST /register_shop (manager)",
            "meat_data": "POST /meat_data (customer)",
            "calculate_quality": "POST /calculate_quality (customer)",
            "meat_list": "GET /meat_list (customer)",
            "admin_users": "GET /admin/users (admin)",
            "admin_shops": "GET /admin/shops (admin)",
            "health": "GET /health (public)",
        }
    }))
}

/// GET /health - Liveness plus a store ping
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.db.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "degraded",
                    "timestamp": now,
                    "database": "unavailable"
                })),
            )
        }
    }
}
