use axum::{Extension, Json};
use serde::Serialize;

use localauth_core::domain::{AuthContext, SessionUser};

use crate::extract::RequireUser;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
pub struct AuthStatus {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

/// Auth status handler - reports the current request's `AuthContext`
pub async fn auth_status(Extension(auth): Extension<AuthContext>) -> Json<AuthStatus> {
    Json(AuthStatus {
        authenticated: auth.is_authenticated(),
        user: auth.into_user(),
    })
}

/// Current user handler - GET /api/auth/user, 401 when signed out
pub async fn current_user(RequireUser(user): RequireUser) -> Json<ApiResponse<SessionUser>> {
    Json(ApiResponse::success(user))
}
