//! # LocalAuth Infrastructure
//! 
//! Session store implementations (adapters).

pub mod memory;

pub use memory::{MemorySessionStore, SessionSweeper};
