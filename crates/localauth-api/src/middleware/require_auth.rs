use axum::{extract::Request, middleware::Next, response::Response};

use localauth_core::domain::AuthContext;

use crate::error::ApiError;

/// Rejects requests without an authenticated user. Install with
/// `route_layer` on routes that sit inside the identity projection.
pub async fn require_auth(request: Request, next: Next) -> Result<Response, ApiError> {
    let authenticated = request
        .extensions()
        .get::<AuthContext>()
        .is_some_and(AuthContext::is_authenticated);

    if !authenticated {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
