//! Session state and its stored form

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::identity::SessionUser;

/// Everything a session carries between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}

/// A session as kept by a store: payload plus absolute expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub data: SessionData,
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    pub fn new(data: SessionData, expires_at: DateTime<Utc>) -> Self {
        Self { data, expires_at }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
