// tests/openapi_integration.rs
use utoipa::OpenApi as _;

use pantry_core::presentation::http::openapi::ApiDoc;

#[test]
fn openapi_document_covers_every_route() {
    let doc = ApiDoc::openapi();
    let json = serde_json::to_value(&doc).expect("serialize document");

    let paths = json["paths"].as_object().expect("paths object");
    for path in [
        "/health",
        "/user/register",
        "/user/login",
        "/user/profile",
        "/user/password",
        "/user/cart",
        "/user/cart/update",
        "/user/cart/totals",
        "/user/cart/{product_id}",
    ] {
        assert!(paths.contains_key(path), "missing path {path}");
    }
}

#[test]
fn openapi_document_declares_bearer_auth() {
    let doc = ApiDoc::openapi();
    let json = serde_json::to_value(&doc).expect("serialize document");

    let scheme = &json["components"]["securitySchemes"]["bearer_token"];
    assert_eq!(scheme["type"], "http");
    assert_eq!(scheme["scheme"], "bearer");
}

#[test]
fn account_schema_has_no_credential_fields() {
    let doc = ApiDoc::openapi();
    let json = serde_json::to_value(&doc).expect("serialize document");

    let props = json["components"]["schemas"]["AccountDto"]["properties"]
        .as_object()
        .expect("AccountDto properties");
    assert!(props.contains_key("email"));
    assert!(!props.contains_key("password"));
    assert!(!props.contains_key("password_hash"));
}
