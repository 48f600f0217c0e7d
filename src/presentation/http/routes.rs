// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{accounts, cart},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::Method,
    routing::{delete, get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    build_router_with_rate_limiter(state, true)
}

/// Rate limiting is keyed by client IP and is switched off in tests, which
/// drive the router without a socket address.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/user/register", post(accounts::register))
        .route("/user/login", post(accounts::login))
        .route(
            "/user/profile",
            get(accounts::profile).put(accounts::update_profile),
        )
        .route("/user/password", put(accounts::change_password))
        .route("/user/cart", get(cart::get_cart).post(cart::add_item))
        .route("/user/cart/update", put(cart::update_quantity))
        .route("/user/cart/totals", get(cart::totals))
        .route("/user/cart/{product_id}", delete(cart::remove_item));

    if rate_limit {
        router = router.layer(rate_limit_layer());
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
