use std::sync::Arc;

use localauth_core::repositories::SessionStore;
use localauth_infrastructure::SessionSweeper;
use localauth_security::CookieSigner;
use localauth_shared::config::SessionSettings;

/// Shared by the session manager across requests
#[derive(Clone)]
pub struct AuthState {
    pub store: Arc<dyn SessionStore>,
    pub signer: CookieSigner,
    pub settings: Arc<SessionSettings>,
    /// Keeps the expiry sweep alive while any router clone holds this state
    pub(crate) sweeper: Option<Arc<SessionSweeper>>,
}

impl AuthState {
    pub fn new(
        settings: SessionSettings,
        store: Arc<dyn SessionStore>,
    ) -> Result<Self, localauth_security::SigningError> {
        let signer = CookieSigner::new(&settings.secret)?;
        Ok(Self {
            store,
            signer,
            settings: Arc::new(settings),
            sweeper: None,
        })
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweeper.as_ref().is_some_and(|s| s.is_running())
    }
}
