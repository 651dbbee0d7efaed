//! Session store trait (port)

use std::time::Duration;

use async_trait::async_trait;

use crate::domain::SessionData;
use crate::error::StoreError;

/// Backing storage for sessions, keyed by session id.
///
/// Implementations must keep concurrent access to different keys safe.
/// Expired entries are never returned by `get`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<SessionData>, StoreError>;

    /// Insert or replace the session, expiring `ttl` from now.
    async fn set(&self, id: &str, data: SessionData, ttl: Duration) -> Result<(), StoreError>;

    /// Push back the expiry of an existing session without rewriting it.
    async fn touch(&self, id: &str, ttl: Duration) -> Result<(), StoreError>;

    async fn destroy(&self, id: &str) -> Result<(), StoreError>;

    /// Drop every expired session. Returns how many were removed.
    async fn sweep_expired(&self) -> Result<usize, StoreError>;
}
