// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use serde_json::Value;

use pantry_core::application::services::ApplicationServices;
use pantry_core::presentation::http::routes::build_router_with_rate_limiter;
use pantry_core::presentation::http::state::HttpState;

use super::mocks;

/// Wires the application services against in-memory stores and stub ports.
/// Registration through the real command service works end to end: the
/// marker hasher and dummy token service round-trip, so a token returned by
/// POST /user/register authenticates later cart and profile requests.
pub fn build_test_state() -> HttpState {
    build_test_state_with_catalog(mocks::StaticCatalog::empty())
}

pub fn build_test_state_with_catalog(catalog: mocks::StaticCatalog) -> HttpState {
    let account_repo: Arc<dyn pantry_core::domain::account::AccountRepository> =
        Arc::new(mocks::InMemoryAccountRepo::new());
    let cart_repo: Arc<dyn pantry_core::domain::cart::CartRepository> =
        Arc::new(mocks::InMemoryCartRepo::new());
    let catalog_repo: Arc<dyn pantry_core::domain::catalog::CatalogReadRepository> =
        Arc::new(catalog);
    let password_hasher: Arc<dyn pantry_core::application::ports::security::PasswordHasher> =
        Arc::new(mocks::MarkerPasswordHasher);
    let token_service: Arc<dyn pantry_core::application::ports::security::TokenService> =
        Arc::new(mocks::DummyTokenService);
    let clock: Arc<dyn pantry_core::application::ports::time::Clock> = Arc::new(mocks::DummyClock);

    let services = Arc::new(ApplicationServices::new(
        account_repo,
        cart_repo,
        catalog_repo,
        password_hasher,
        token_service,
        clock,
    ));

    HttpState { services }
}

/// Router for driving with `tower::ServiceExt::oneshot`. Rate limiting is
/// disabled because oneshot requests carry no peer address.
pub fn make_test_router() -> axum::Router {
    build_router_with_rate_limiter(build_test_state(), false)
}

pub fn make_test_router_with_catalog(catalog: mocks::StaticCatalog) -> axum::Router {
    build_router_with_rate_limiter(build_test_state_with_catalog(catalog), false)
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json: Value = serde_json::from_slice(&bytes).expect("valid json body");
    (status, json)
}

/// Assert an error body of the shape `{"error": ..., "message": ...}` with
/// the expected status and canonical reason string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "content-type: {ct}");
    let json: Value = serde_json::from_slice(&bytes).expect("json error body");
    assert_eq!(
        json.get("error").and_then(Value::as_str),
        Some(expected_error)
    );
    assert!(
        json.get("message")
            .and_then(Value::as_str)
            .is_some_and(|m| !m.is_empty()),
        "expected non-empty message field"
    );
}
