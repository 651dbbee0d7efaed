use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};

use localauth_security::{generate_session_id, is_valid_session_id};

use crate::cookie::{find_cookie, session_cookie};
use crate::session::{Session, SessionSnapshot};
use crate::state::AuthState;

/// Session manager - restores or creates the session, exposes it to later
/// stages, and persists it once the response is ready
pub async fn session_manager(
    State(state): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie = find_cookie(request.headers(), &state.settings.cookie_name);
    let session = load_session(&state, cookie).await;
    request.extensions_mut().insert(session.clone());

    let mut response = next.run(request).await;
    commit_session(&state, &session.snapshot(), &mut response).await;
    response
}

async fn load_session(state: &AuthState, cookie: Option<String>) -> Session {
    let cookie_id = cookie.and_then(|value| match state.signer.unsign(&value) {
        Some(id) if is_valid_session_id(&id) => Some(id),
        Some(_) => {
            debug!("Ignoring session cookie with malformed id");
            None
        }
        None => {
            debug!("Ignoring session cookie with invalid signature");
            None
        }
    });

    if let Some(id) = cookie_id {
        match state.store.get(&id).await {
            Ok(Some(data)) => return Session::restored(id, data, state.store.clone()),
            Ok(None) => debug!("Session cookie refers to an unknown or expired session"),
            Err(e) => error!("Failed to load session: {}", e),
        }
    }

    Session::fresh(generate_session_id(), state.store.clone())
}

async fn commit_session(state: &AuthState, snapshot: &SessionSnapshot, response: &mut Response) {
    if snapshot.destroyed {
        return;
    }

    let settings = &state.settings;
    let ttl = settings.max_age();

    let should_save = snapshot.modified
        || (snapshot.is_new && settings.save_uninitialized)
        || (!snapshot.is_new && settings.resave);

    let saved = if should_save {
        match state.store.set(&snapshot.id, snapshot.data.clone(), ttl).await {
            Ok(()) => true,
            Err(e) => {
                error!("Failed to save session: {}", e);
                false
            }
        }
    } else {
        if !snapshot.is_new {
            if let Err(e) = state.store.touch(&snapshot.id, ttl).await {
                warn!("Failed to refresh session expiry: {}", e);
            }
        }
        false
    };

    let should_set_cookie = if snapshot.is_new {
        saved
    } else {
        settings.rolling || snapshot.modified
    };
    if !should_set_cookie {
        return;
    }

    match session_cookie(settings, &state.signer.sign(&snapshot.id)) {
        Ok(value) => {
            response.headers_mut().append(SET_COOKIE, value);
        }
        Err(e) => error!("Failed to build session cookie: {}", e),
    }
}
