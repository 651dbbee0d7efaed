//! Application-wide constants

/// Environment variable holding the session cookie signing key.
pub const SESSION_SECRET_ENV: &str = "SESSION_SECRET";

/// Fallback signing key. Development only; refused when `app.env` is production.
pub const DEV_SESSION_SECRET: &str = "local-dev-session-secret";

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "localauth.sid";
pub const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86_400;
pub const DEFAULT_STORE_SWEEP_INTERVAL_SECS: u64 = 86_400;

/// Upper bound for cookie max-age and the sweep interval (400 days, the
/// browser cap on cookie lifetime).
pub const MAX_SESSION_DURATION_SECS: u64 = 400 * 86_400;

pub const LOGIN_PATH: &str = "/api/login";
pub const LOGOUT_PATH: &str = "/api/logout";
pub const POST_AUTH_REDIRECT: &str = "/";

pub const PRODUCTION_ENV: &str = "production";
