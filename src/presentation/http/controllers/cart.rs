// src/presentation/http/controllers/cart.rs
use crate::application::{
    commands::carts::{AddItemCommand, RemoveItemCommand, UpdateQuantityCommand},
    dto::{CartDto, CartTotalsDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddItemRequest {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
}

#[utoipa::path(
    get,
    path = "/user/cart",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "The account's cart; empty when nothing stored.", body = CartDto),
        (status = 401, description = "Missing or invalid token.")
    ),
    tag = "Cart"
)]
pub async fn get_cart(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
) -> HttpResult<Json<CartDto>> {
    state
        .services
        .cart_queries
        .get_cart(&account)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/user/cart",
    security(("bearer_token" = [])),
    request_body = AddItemRequest,
    responses(
        (status = 200, description = "Line appended or incremented.", body = CartDto),
        (status = 400, description = "Quantity below 1.")
    ),
    tag = "Cart"
)]
pub async fn add_item(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    Json(payload): Json<AddItemRequest>,
) -> HttpResult<Json<CartDto>> {
    let command = AddItemCommand {
        product_id: payload.product_id,
        quantity: payload.quantity,
    };

    state
        .services
        .cart_commands
        .add_item(&account, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/user/cart/update",
    security(("bearer_token" = [])),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set exactly.", body = CartDto),
        (status = 400, description = "Quantity below 1."),
        (status = 404, description = "Product not in cart.")
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    Json(payload): Json<UpdateQuantityRequest>,
) -> HttpResult<Json<CartDto>> {
    let command = UpdateQuantityCommand {
        product_id: payload.product_id,
        quantity: payload.quantity,
    };

    state
        .services
        .cart_commands
        .update_quantity(&account, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/user/cart/{product_id}",
    security(("bearer_token" = [])),
    params(("product_id" = i64, Path, description = "Product to remove")),
    responses(
        (status = 200, description = "Line removed; removing an absent line also succeeds.", body = CartDto)
    ),
    tag = "Cart"
)]
pub async fn remove_item(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    Path(product_id): Path<i64>,
) -> HttpResult<Json<CartDto>> {
    let command = RemoveItemCommand { product_id };

    state
        .services
        .cart_commands
        .remove_item(&account, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/user/cart/totals",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Subtotal, tax, and total against current catalog prices.", body = CartTotalsDto)
    ),
    tag = "Cart"
)]
pub async fn totals(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
) -> HttpResult<Json<CartTotalsDto>> {
    state
        .services
        .cart_queries
        .totals(&account)
        .await
        .into_http()
        .map(Json)
}
