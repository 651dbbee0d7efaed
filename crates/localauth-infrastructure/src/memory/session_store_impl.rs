// ============================================================================
// LocalAuth Infrastructure - In-Memory Session Store
// File: crates/localauth-infrastructure/src/memory/session_store_impl.rs
// ============================================================================

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use localauth_core::domain::{SessionData, SessionRecord};
use localauth_core::error::StoreError;
use localauth_core::repositories::SessionStore;

/// Volatile session table. DashMap shards keep writes to different
/// session ids from contending on one lock.
pub struct MemorySessionStore {
    sessions: DashMap<String, SessionRecord>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Number of held sessions, expired ones included until swept
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn expiry_from_now(ttl: Duration) -> Result<DateTime<Utc>, StoreError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| StoreError::InternalError(format!("TTL out of range: {}", e)))?;
        Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| StoreError::InternalError("TTL overflows the session expiry".into()))
    }
}

impl Default for MemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, id: &str) -> Result<Option<SessionData>, StoreError> {
        let now = Utc::now();
        let Some(entry) = self.sessions.get(id) else {
            return Ok(None);
        };

        if entry.is_expired(now) {
            // Release the shard read lock before removing
            drop(entry);
            self.sessions.remove_if(id, |_, record| record.is_expired(now));
            debug!("Session expired, removed from store");
            return Ok(None);
        }

        Ok(Some(entry.data.clone()))
    }

    async fn set(&self, id: &str, data: SessionData, ttl: Duration) -> Result<(), StoreError> {
        let expires_at = Self::expiry_from_now(ttl)?;
        self.sessions
            .insert(id.to_string(), SessionRecord::new(data, expires_at));
        Ok(())
    }

    async fn touch(&self, id: &str, ttl: Duration) -> Result<(), StoreError> {
        let expires_at = Self::expiry_from_now(ttl)?;
        let now = Utc::now();

        if let Some(mut entry) = self.sessions.get_mut(id) {
            if !entry.is_expired(now) {
                entry.expires_at = expires_at;
            }
        }
        Ok(())
    }

    async fn destroy(&self, id: &str) -> Result<(), StoreError> {
        self.sessions.remove(id);
        Ok(())
    }

    async fn sweep_expired(&self) -> Result<usize, StoreError> {
        let now = Utc::now();
        let start_len = self.sessions.len();
        self.sessions.retain(|_, record| !record.is_expired(now));

        let remaining = self.len();
        let removed = start_len.saturating_sub(remaining);
        debug!("Sweep removed {} sessions, {} remaining", removed, remaining);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use localauth_core::domain::SessionUser;

    const HOUR: Duration = Duration::from_secs(3600);

    fn signed_in() -> SessionData {
        SessionData {
            user: Some(SessionUser::local_dev()),
        }
    }

    #[tokio::test]
    async fn test_store_basic_operations() {
        let store = MemorySessionStore::new();

        store.set("a", signed_in(), HOUR).await.unwrap();
        assert_eq!(store.len(), 1);

        let data = store.get("a").await.unwrap();
        assert_eq!(data, Some(signed_in()));
        assert_eq!(store.get("missing").await.unwrap(), None);

        store.destroy("a").await.unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("a").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_destroy_missing_is_ok() {
        let store = MemorySessionStore::new();
        assert!(store.destroy("nope").await.is_ok());
    }

    #[tokio::test]
    async fn test_expired_session_is_absent() {
        let store = MemorySessionStore::new();
        store.set("a", signed_in(), Duration::ZERO).await.unwrap();

        assert_eq!(store.get("a").await.unwrap(), None);
        assert!(store.is_empty(), "lazy expiry should remove the entry");
    }

    #[tokio::test]
    async fn test_touch_extends_expiry() {
        let store = MemorySessionStore::new();
        store
            .set("a", signed_in(), Duration::from_millis(50))
            .await
            .unwrap();
        store.touch("a", HOUR).await.unwrap();

        tokio::time::sleep(Duration::from_millis(80)).await;
        assert_eq!(store.get("a").await.unwrap(), Some(signed_in()));
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let store = MemorySessionStore::new();
        store.set("old", signed_in(), Duration::ZERO).await.unwrap();
        store.set("fresh", signed_in(), HOUR).await.unwrap();

        assert_eq!(store.sweep_expired().await.unwrap(), 1);
        assert_eq!(store.len(), 1);
        assert!(store.get("fresh").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_oversized_ttl_is_an_error() {
        let store = MemorySessionStore::new();
        let ttl = Duration::from_secs(10_000_000_000_000);

        let err = store.set("a", signed_in(), ttl).await.unwrap_err();
        assert!(matches!(err, StoreError::InternalError(_)));
        assert!(store.is_empty());

        store.set("b", signed_in(), HOUR).await.unwrap();
        assert!(store.touch("b", ttl).await.is_err());
        assert!(store.get("b").await.unwrap().is_some());
    }
}
