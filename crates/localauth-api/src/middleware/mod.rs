//! Middleware stages, outermost first: session manager, identity projection,
//! and the optional `require_auth` guard for protected routes.

pub mod identity;
pub mod require_auth;
pub mod session;

pub use identity::project_identity;
pub use require_auth::require_auth;
pub use session::session_manager;
