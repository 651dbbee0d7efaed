// ============================================================================
// LocalAuth API - Bootstrap
// File: crates/localauth-api/src/bootstrap.rs
// ============================================================================
//! Wires the session manager, the mock credential routes, and the identity
//! projection into an application router.

use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tracing::{info, warn};

use localauth_core::repositories::SessionStore;
use localauth_infrastructure::{MemorySessionStore, SessionSweeper};
use localauth_shared::config::SessionSettings;
use localauth_shared::constants::{LOGIN_PATH, LOGOUT_PATH};

use crate::error::ApiError;
use crate::handlers::auth;
use crate::middleware::{project_identity, session_manager};
use crate::state::AuthState;

pub struct LocalAuth {
    state: AuthState,
}

impl LocalAuth {
    /// In-memory store with a background expiry sweep.
    ///
    /// Spawns a task, so it must run inside a tokio runtime.
    pub fn new(settings: SessionSettings) -> Result<Self, ApiError> {
        let every = settings.sweep_interval();
        let store = Arc::new(MemorySessionStore::new());
        let local_auth = Self::with_store(settings, store)?.with_sweeper(every);
        info!(
            "LocalAuth ready (memory store, cookie max-age {}s)",
            local_auth.state.settings.cookie_max_age_secs
        );
        Ok(local_auth)
    }

    /// Any store, no sweep. Pair with `with_sweeper` if the store needs one.
    pub fn with_store(
        settings: SessionSettings,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, ApiError> {
        let state = AuthState::new(settings, store)?;
        Ok(Self { state })
    }

    /// Sweeps the store every `every`. A zero interval disables the sweep.
    pub fn with_sweeper(mut self, every: Duration) -> Self {
        let sweeper = SessionSweeper::spawn(self.state.store.clone(), every);
        if sweeper.is_none() {
            warn!("Session expiry sweep disabled");
        }
        self.state.sweeper = sweeper.map(Arc::new);
        self
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// `GET /api/login` and `GET /api/logout`
    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new()
            .route(LOGIN_PATH, get(auth::login))
            .route(LOGOUT_PATH, get(auth::logout))
    }

    /// Adds the credential routes and wraps every route of `app` with the
    /// session manager and identity projection. Call after all routes are added.
    pub fn install<S>(self, app: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        app.merge(Self::routes()).layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(self.state, session_manager))
                .layer(middleware::from_fn(project_identity)),
        )
    }
}
