// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AdminPrincipal, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Rejects the request with 401 unless it carries the administrator bearer token.
#[derive(Debug, Clone)]
pub struct AdminAuthenticated(pub AdminPrincipal);

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let app_state = parts.extensions.get::<HttpState>().cloned().ok_or_else(|| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;

        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        let principal = app_state
            .services
            .authenticate_admin(header.token())
            .await
            .map_err(HttpError::from_error)?;

        Ok(Self(principal))
    }
}
