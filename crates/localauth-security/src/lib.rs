//! # LocalAuth Security
//! 
//! Session identifiers and signed session cookies.

pub mod session_id;
pub mod signing;

pub use session_id::{generate_session_id, is_valid_session_id};
pub use signing::{CookieSigner, SigningError};
