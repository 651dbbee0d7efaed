//! Per-request authentication view

use super::identity::SessionUser;
use super::session::SessionData;

/// Derived from the session on every request; never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    user: Option<SessionUser>,
}

impl AuthContext {
    pub fn anonymous() -> Self {
        Self { user: None }
    }

    pub fn from_session(data: &SessionData) -> Self {
        Self {
            user: data.user.clone(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn into_user(self) -> Option<SessionUser> {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_follows_session() {
        let anon = AuthContext::from_session(&SessionData::default());
        assert!(!anon.is_authenticated());
        assert!(anon.user().is_none());
        assert_eq!(anon, AuthContext::anonymous());

        let data = SessionData {
            user: Some(SessionUser::local_dev()),
        };
        let ctx = AuthContext::from_session(&data);
        assert!(ctx.is_authenticated());
        assert_eq!(ctx.user().map(|u| u.subject()), Some("local-dev-user"));
    }
}
