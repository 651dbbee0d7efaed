// ============================================================================
// LocalAuth API - Mock Credential Handlers
// File: crates/localauth-api/src/handlers/auth.rs
// ============================================================================
//! Login/logout endpoints for local development. No credentials are checked.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use localauth_core::domain::SessionUser;
use localauth_shared::constants::POST_AUTH_REDIRECT;

use crate::session::Session;

/// Login handler - GET /api/login
///
/// Puts the fixed development identity into the session.
pub async fn login(session: Session) -> Response {
    let user = SessionUser::local_dev();
    info!("Mock login as {}", user.subject());
    session.set_user(user);
    redirect_home()
}

/// Logout handler - GET /api/logout
///
/// Destroys the whole session. Redirects even when the store fails.
pub async fn logout(session: Session) -> Response {
    match session.destroy().await {
        Ok(()) => info!("Mock logout, session destroyed"),
        Err(e) => error!("Failed to destroy session on logout: {}", e),
    }
    redirect_home()
}

/// 302 Found to the application root
fn redirect_home() -> Response {
    (StatusCode::FOUND, [(LOCATION, POST_AUTH_REDIRECT)]).into_response()
}
