use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::policy::authorize;
use crate::error::ApiError;
use crate::types::Role;

use super::auth::AuthUser;

/// Route layer that admits only callers holding `required`.
///
/// Must sit inside `jwt_auth_middleware`. Runs before the handler's body
/// extractor, so the wrong role is reported as 403 whatever the body holds.
///
/// ```ignore
/// Router::new()
///     .route("/register_shop", post(shop::register_shop))
///     .route_layer(from_fn_with_state(Role::Manager, require_role))
/// ```
pub async fn require_role(
    State(required): State<Role>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| ApiError::unauthorized("JWT authentication required before role check"))?;

    authorize(user, required)?;

    Ok(next.run(request).await)
}
