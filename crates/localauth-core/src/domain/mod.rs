//! # LocalAuth Core - Domain Module
//! 
//! Identity payload, session record, and the per-request auth view.

pub mod identity;
pub mod session;
pub mod auth_context;

pub use identity::{Claims, SessionUser};
pub use session::{SessionData, SessionRecord};
pub use auth_context::AuthContext;
