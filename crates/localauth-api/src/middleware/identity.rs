use axum::{extract::Request, middleware::Next, response::Response};
use tracing::warn;

use localauth_core::domain::AuthContext;

use crate::session::Session;

/// Identity projection - derives the request's `AuthContext` from the
/// session as it stands right now
pub async fn project_identity(mut request: Request, next: Next) -> Response {
    let auth = match request.extensions().get::<Session>() {
        Some(session) => AuthContext::from_session(&session.data()),
        None => {
            warn!("No session on request; is the session manager installed?");
            AuthContext::anonymous()
        }
    };

    request.extensions_mut().insert(auth);
    next.run(request).await
}
