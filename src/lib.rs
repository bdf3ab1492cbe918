pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod state;
pub mod types;
pub mod validation;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::middleware::{jwt_auth_middleware, require_role};
use crate::state::AppState;
use crate::types::Role;

/// Build the full application router over an initialized state.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let mut router = Router::new()
        // Public
        .route("/", get(handlers::public::root))
        .route("/health", get(handlers::public::health))
        .merge(auth_public_routes())
        // Protected: token first, then role, then body
        .merge(protected_routes(state.clone()))
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes));

    if config.security.enable_cors {
        router = router.layer(cors_layer(&config));
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::public::auth;

    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(manager_routes())
        .merge(customer_routes())
        .merge(admin_routes())
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn manager_routes() -> Router<AppState> {
    use handlers::protected::shop;

    Router::new()
        .route("/register_shop", post(shop::register_shop))
        .route_layer(from_fn_with_state(Role::Manager, require_role))
}

fn customer_routes() -> Router<AppState> {
    use handlers::protected::meat;

    Router::new()
        .route("/meat_data", post(meat::store_reading))
        .route("/calculate_quality", post(meat::calculate_quality))
        .route("/meat_list", get(meat::list_readings))
        .route_layer(from_fn_with_state(Role::Customer, require_role))
}

fn admin_routes() -> Router<AppState> {
    use handlers::elevated::admin;

    Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/shops", get(admin::list_shops))
        .route_layer(from_fn_with_state(Role::Admin, require_role))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins = &config.security.cors_origins;
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "skipping unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}
