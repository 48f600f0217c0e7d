// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedAccount, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Verified bearer-token claims. The token is checked once here, at the
/// request boundary; handlers receive the resolved account identity.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedAccount);

impl FromRequestParts<()> for Authenticated {
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &()) -> Result<Self, Self::Rejection> {
        let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                HttpError::from_error(ApplicationError::Infrastructure(
                    "application state missing".into(),
                ))
            })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::invalid_token(
                    "missing Authorization header",
                ))
            })?;

        let token = header.token();
        let service = app_state.services.token_service();
        let account = service
            .verify(token)
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(account))
    }
}
