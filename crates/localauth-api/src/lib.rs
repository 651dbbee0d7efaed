//! # LocalAuth API
//!
//! Session middleware, mock credential handlers, and the bootstrap that wires
//! them into an axum router.

pub mod bootstrap;
pub mod cookie;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod session;
pub mod state;

pub use bootstrap::LocalAuth;
pub use error::ApiError;
pub use extract::RequireUser;
pub use session::Session;
pub use state::AuthState;
