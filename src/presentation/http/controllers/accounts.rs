// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::{
        ChangePasswordCommand, LoginCommand, RegisterAccountCommand, UpdateProfileCommand,
    },
    dto::{AccountDto, AuthTokenDto},
};
use crate::domain::account::PreferencesPatch;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<PreferencesRequest>,
}

/// Wire shape of a preferences patch: absent fields stay untouched, present
/// fields fully replace the stored value.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesRequest {
    pub dietary_goals: Option<BTreeSet<String>>,
    pub allergies: Option<BTreeSet<String>>,
    #[schema(value_type = Option<String>)]
    pub delivery_speed: Option<crate::domain::account::DeliverySpeed>,
}

impl From<PreferencesRequest> for PreferencesPatch {
    fn from(req: PreferencesRequest) -> Self {
        Self {
            dietary_goals: req.dietary_goals,
            allergies: req.allergies,
            delivery_speed: req.delivery_speed,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    pub token: AuthTokenDto,
    pub user: AccountDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub user: AccountDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub preferences: Option<PreferencesRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangePasswordRequest {
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Account created; session token issued.", body = AuthResponse),
        (status = 400, description = "Missing or malformed fields."),
        (status = 409, description = "Email already registered.")
    ),
    tag = "Account"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<RegisterRequest>,
) -> HttpResult<Json<AuthResponse>> {
    let command = RegisterAccountCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
        preferences: payload.preferences.map(Into::into),
    };

    let result = state
        .services
        .account_commands
        .register(command)
        .await
        .into_http()?;

    Ok(Json(AuthResponse {
        token: result.token,
        user: result.account,
    }))
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials verified; session token issued.", body = AuthResponse),
        (status = 401, description = "Invalid credentials.")
    ),
    tag = "Account"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<LoginRequest>,
) -> HttpResult<Json<AuthResponse>> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    let result = state
        .services
        .account_commands
        .login(command)
        .await
        .into_http()?;

    Ok(Json(AuthResponse {
        token: result.token,
        user: result.account,
    }))
}

#[utoipa::path(
    get,
    path = "/user/profile",
    security(("bearer_token" = [])),
    responses(
        (status = 200, description = "Public account view.", body = ProfileResponse),
        (status = 401, description = "Missing or invalid token.")
    ),
    tag = "Account"
)]
pub async fn profile(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
) -> HttpResult<Json<ProfileResponse>> {
    let user = state
        .services
        .account_queries
        .get_profile(&account)
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { user }))
}

#[utoipa::path(
    put,
    path = "/user/profile",
    security(("bearer_token" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated.", body = ProfileResponse),
        (status = 404, description = "Account not found.")
    ),
    tag = "Account"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    Json(payload): Json<UpdateProfileRequest>,
) -> HttpResult<Json<ProfileResponse>> {
    let command = UpdateProfileCommand {
        name: payload.name,
        preferences: payload.preferences.map(Into::into),
    };

    let user = state
        .services
        .account_commands
        .update_profile(&account, command)
        .await
        .into_http()?;

    Ok(Json(ProfileResponse { user }))
}

#[utoipa::path(
    put,
    path = "/user/password",
    security(("bearer_token" = [])),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password rotated.", body = MessageResponse),
        (status = 400, description = "Missing fields."),
        (status = 401, description = "Current password incorrect."),
        (status = 404, description = "Account not found.")
    ),
    tag = "Account"
)]
pub async fn change_password(
    Extension(state): Extension<HttpState>,
    Authenticated(account): Authenticated,
    Json(payload): Json<ChangePasswordRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = ChangePasswordCommand {
        current_password: payload.current_password,
        new_password: payload.new_password,
    };

    state
        .services
        .account_commands
        .change_password(&account, command)
        .await
        .into_http()?;

    Ok(Json(MessageResponse {
        message: "Password updated successfully".into(),
    }))
}
