//! In-process session storage

pub mod session_store_impl;
pub mod sweeper;

pub use session_store_impl::MemorySessionStore;
pub use sweeper::SessionSweeper;
