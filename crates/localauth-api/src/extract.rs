//! Typed extractors for handlers behind the LocalAuth layers

use axum::{extract::FromRequestParts, http::request::Parts};

use localauth_core::domain::{AuthContext, SessionUser};

use crate::error::ApiError;
use crate::session::Session;

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(ApiError::SessionMissing)
    }
}

/// The authenticated user, or a 401 rejection.
#[derive(Debug, Clone)]
pub struct RequireUser(pub SessionUser);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .and_then(AuthContext::user)
            .cloned()
            .map(RequireUser)
            .ok_or(ApiError::Unauthorized)
    }
}
