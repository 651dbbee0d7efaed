//! Fixed development identity

use serde::{Deserialize, Serialize};

pub const LOCAL_DEV_SUBJECT: &str = "local-dev-user";
pub const LOCAL_DEV_NAME: &str = "Local Developer";
pub const LOCAL_DEV_EMAIL: &str = "dev@localhost.com";
pub const LOCAL_DEV_FIRST_NAME: &str = "Local";
pub const LOCAL_DEV_LAST_NAME: &str = "Developer";

/// Identity claims, serialized as `{ sub, name, email, firstName, lastName }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub sub: String,
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The `user` value held in a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub claims: Claims,
}

impl SessionUser {
    /// The hardcoded identity every mock login receives.
    pub fn local_dev() -> Self {
        Self {
            claims: Claims {
                sub: LOCAL_DEV_SUBJECT.to_string(),
                name: LOCAL_DEV_NAME.to_string(),
                email: LOCAL_DEV_EMAIL.to_string(),
                first_name: LOCAL_DEV_FIRST_NAME.to_string(),
                last_name: LOCAL_DEV_LAST_NAME.to_string(),
            },
        }
    }

    pub fn subject(&self) -> &str {
        &self.claims.sub
    }
}
