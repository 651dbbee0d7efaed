//! # LocalAuth Shared
//! 
//! Shared configuration, constants, and telemetry for the LocalAuth workspace.

pub mod constants;
pub mod telemetry;
pub mod config;
pub mod error;

pub use crate::config::{AppConfig, SameSite, SessionSettings};
pub use error::AppError;
