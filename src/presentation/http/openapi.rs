// src/presentation/http/openapi.rs
use crate::application::dto::{AccountDto, AuthTokenDto, CartDto, CartLineDto, CartTotalsDto};
use crate::presentation::http::controllers::{accounts, cart};
use axum::Router;
use serde::Serialize;
use utoipa::{
    Modify, OpenApi, ToSchema,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_token",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        accounts::register,
        accounts::login,
        accounts::profile,
        accounts::update_profile,
        accounts::change_password,
        cart::get_cart,
        cart::add_item,
        cart::update_quantity,
        cart::remove_item,
        cart::totals,
    ),
    components(schemas(
        StatusResponse,
        AccountDto,
        AuthTokenDto,
        CartDto,
        CartLineDto,
        CartTotalsDto,
        accounts::RegisterRequest,
        accounts::PreferencesRequest,
        accounts::LoginRequest,
        accounts::AuthResponse,
        accounts::ProfileResponse,
        accounts::UpdateProfileRequest,
        accounts::ChangePasswordRequest,
        accounts::MessageResponse,
        cart::AddItemRequest,
        cart::UpdateQuantityRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Account", description = "Registration, login, profile, password."),
        (name = "Cart", description = "Per-account cart mutation and totals."),
        (name = "System", description = "Health and diagnostics.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
