//! Application error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("SESSION_SECRET must be set when running in {0}")]
    MissingSessionSecret(String),

    #[error("Invalid setting {0}: {1}")]
    InvalidSetting(&'static str, String),
}
