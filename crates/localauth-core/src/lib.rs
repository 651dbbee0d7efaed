//! # LocalAuth Core
//! 
//! Domain types and the session store port for the local development auth mock.

pub mod domain;
pub mod repositories;
pub mod error;

// Re-export domain types
pub use domain::*;
pub use error::StoreError;
pub use repositories::SessionStore;
