//! Request-scoped session handle

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use localauth_core::domain::{SessionData, SessionUser};
use localauth_core::error::StoreError;
use localauth_core::repositories::SessionStore;

struct SessionInner {
    id: String,
    data: SessionData,
    is_new: bool,
    modified: bool,
    destroyed: bool,
}

/// Handle to the current request's session.
///
/// Clones share state, so changes made by a handler are visible to the
/// session manager when the response is committed.
#[derive(Clone)]
pub struct Session {
    inner: Arc<Mutex<SessionInner>>,
    store: Arc<dyn SessionStore>,
}

/// Point-in-time copy used when committing the response.
#[derive(Debug, Clone)]
pub(crate) struct SessionSnapshot {
    pub id: String,
    pub data: SessionData,
    pub is_new: bool,
    pub modified: bool,
    pub destroyed: bool,
}

impl Session {
    pub(crate) fn fresh(id: String, store: Arc<dyn SessionStore>) -> Self {
        Self::build(id, SessionData::default(), true, store)
    }

    pub(crate) fn restored(id: String, data: SessionData, store: Arc<dyn SessionStore>) -> Self {
        Self::build(id, data, false, store)
    }

    fn build(id: String, data: SessionData, is_new: bool, store: Arc<dyn SessionStore>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                id,
                data,
                is_new,
                modified: false,
                destroyed: false,
            })),
            store,
        }
    }

    pub fn data(&self) -> SessionData {
        self.inner.lock().data.clone()
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.inner.lock().data.user.clone()
    }

    /// Stores `user`. Writing the value already held does not mark the session modified.
    pub fn set_user(&self, user: SessionUser) {
        let mut inner = self.inner.lock();
        if inner.data.user.as_ref() != Some(&user) {
            inner.data.user = Some(user);
            inner.modified = true;
        }
    }

    /// Removes the whole session from the store.
    ///
    /// The handle is detached either way, so a failed destroy never gets
    /// re-saved at the end of the request.
    pub async fn destroy(&self) -> Result<(), StoreError> {
        let id = {
            let mut inner = self.inner.lock();
            inner.destroyed = true;
            inner.data = SessionData::default();
            inner.id.clone()
        };
        self.store.destroy(&id).await
    }

    pub(crate) fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.lock();
        SessionSnapshot {
            id: inner.id.clone(),
            data: inner.data.clone(),
            is_new: inner.is_new,
            modified: inner.modified,
            destroyed: inner.destroyed,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Session")
            .field("is_new", &inner.is_new)
            .field("modified", &inner.modified)
            .field("destroyed", &inner.destroyed)
            .field("authenticated", &inner.data.user.is_some())
            .finish_non_exhaustive()
    }
}
