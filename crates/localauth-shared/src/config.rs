//! Configuration management

use std::time::Duration;

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::warn;

use crate::constants::{
    DEFAULT_SESSION_COOKIE_NAME, DEFAULT_SESSION_MAX_AGE_SECS, DEFAULT_STORE_SWEEP_INTERVAL_SECS,
    DEV_SESSION_SECRET, MAX_SESSION_DURATION_SECS, PRODUCTION_ENV, SESSION_SECRET_ENV,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub env: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

/// Session cookie `SameSite` attribute
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

/// Options recognized by the session manager.
#[derive(Debug, Deserialize, Clone)]
pub struct SessionSettings {
    /// Cookie signing key
    pub secret: String,
    pub cookie_name: String,
    pub cookie_path: String,
    #[serde(default)]
    pub cookie_same_site: SameSite,
    /// Require HTTPS for the cookie. Off for local development.
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
    pub cookie_max_age_secs: u64,
    /// How often the store purges expired sessions
    pub store_sweep_interval_secs: u64,
    /// Rewrite sessions that were not modified during the request
    pub resave: bool,
    /// Store sessions that nothing was written to
    pub save_uninitialized: bool,
    /// Re-issue the cookie on every response
    pub rolling: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            secret: DEV_SESSION_SECRET.to_string(),
            cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
            cookie_path: "/".to_string(),
            cookie_same_site: SameSite::Lax,
            cookie_secure: false,
            cookie_http_only: true,
            cookie_max_age_secs: DEFAULT_SESSION_MAX_AGE_SECS,
            store_sweep_interval_secs: DEFAULT_STORE_SWEEP_INTERVAL_SECS,
            resave: false,
            save_uninitialized: false,
            rolling: false,
        }
    }
}

impl SessionSettings {
    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.cookie_max_age_secs)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.store_sweep_interval_secs)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.secret == DEV_SESSION_SECRET
    }

    /// Rejects durations no cookie or timer can represent.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.cookie_max_age_secs > MAX_SESSION_DURATION_SECS {
            return Err(AppError::InvalidSetting(
                "session.cookie_max_age_secs",
                format!("must be at most {}", MAX_SESSION_DURATION_SECS),
            ));
        }
        if self.store_sweep_interval_secs > MAX_SESSION_DURATION_SECS {
            return Err(AppError::InvalidSetting(
                "session.store_sweep_interval_secs",
                format!("must be at most {}", MAX_SESSION_DURATION_SECS),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let secret = std::env::var(SESSION_SECRET_ENV).ok().filter(|s| !s.is_empty());
        let defaults = SessionSettings::default();

        let config = Config::builder()
            .set_default("app.env", env.as_str())?
            .set_default("app.host", "127.0.0.1")?
            .set_default("app.port", 5000)?
            .set_default("app.name", "localauth-server")?
            .set_default("session.secret", defaults.secret)?
            .set_default("session.cookie_name", defaults.cookie_name)?
            .set_default("session.cookie_path", defaults.cookie_path)?
            .set_default("session.cookie_secure", defaults.cookie_secure)?
            .set_default("session.cookie_http_only", defaults.cookie_http_only)?
            .set_default("session.cookie_max_age_secs", defaults.cookie_max_age_secs)?
            .set_default(
                "session.store_sweep_interval_secs",
                defaults.store_sweep_interval_secs,
            )?
            .set_default("session.resave", defaults.resave)?
            .set_default("session.save_uninitialized", defaults.save_uninitialized)?
            .set_default("session.rolling", defaults.rolling)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::default().separator("__").try_parsing(true))
            .set_override_option("session.secret", secret)?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.session.validate()?;
        config.check_secret()?;
        Ok(config)
    }

    /// Refuses the built-in signing key outside development.
    pub fn check_secret(&self) -> Result<(), AppError> {
        if !self.session.uses_dev_secret() {
            return Ok(());
        }
        if self.is_production() {
            return Err(AppError::MissingSessionSecret(self.app.env.clone()));
        }
        warn!(
            "{} is not set; signing session cookies with the development secret",
            SESSION_SECRET_ENV
        );
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case(PRODUCTION_ENV)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(env: &str, secret: &str) -> AppConfig {
        AppConfig {
            app: AppSettings {
                env: env.to_string(),
                host: "127.0.0.1".to_string(),
                port: 5000,
                name: "localauth-server".to_string(),
            },
            session: SessionSettings {
                secret: secret.to_string(),
                ..SessionSettings::default()
            },
        }
    }

    #[test]
    fn test_session_defaults() {
        let s = SessionSettings::default();
        assert_eq!(s.max_age(), Duration::from_secs(24 * 60 * 60));
        assert_eq!(s.sweep_interval(), Duration::from_secs(24 * 60 * 60));
        assert!(!s.cookie_secure);
        assert!(s.cookie_http_only);
        assert!(!s.resave);
        assert!(!s.save_uninitialized);
        assert!(s.uses_dev_secret());
        assert_eq!(s.cookie_same_site, SameSite::Lax);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_oversized_durations_rejected() {
        let s = SessionSettings {
            cookie_max_age_secs: 10_000_000_000_000,
            ..SessionSettings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(AppError::InvalidSetting("session.cookie_max_age_secs", _))
        ));

        let s = SessionSettings {
            store_sweep_interval_secs: MAX_SESSION_DURATION_SECS + 1,
            ..SessionSettings::default()
        };
        assert!(s.validate().is_err());
    }

    /// Single test so the process environment is only touched from one thread.
    #[test]
    fn test_load_reads_environment() {
        std::env::remove_var("APP_ENV");
        std::env::set_var(SESSION_SECRET_ENV, "secret-from-env");
        std::env::set_var("SESSION__COOKIE_MAX_AGE_SECS", "7200");
        std::env::set_var("SESSION__ROLLING", "true");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.app.env, "development");
        assert_eq!(config.session.secret, "secret-from-env");
        assert_eq!(config.session.max_age(), Duration::from_secs(7200));
        assert!(config.session.rolling);
        assert!(config.session.cookie_http_only);

        // Empty secret falls back to the development literal
        std::env::set_var(SESSION_SECRET_ENV, "");
        let config = AppConfig::load().unwrap();
        assert!(config.session.uses_dev_secret());

        std::env::set_var("APP_ENV", "production");
        assert!(matches!(
            AppConfig::load(),
            Err(AppError::MissingSessionSecret(_))
        ));

        std::env::remove_var("APP_ENV");
        std::env::set_var("SESSION__COOKIE_MAX_AGE_SECS", "10000000000000");
        assert!(matches!(
            AppConfig::load(),
            Err(AppError::InvalidSetting(..))
        ));

        for key in [
            SESSION_SECRET_ENV,
            "SESSION__COOKIE_MAX_AGE_SECS",
            "SESSION__ROLLING",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_dev_secret_allowed_in_development() {
        assert!(config_for("development", DEV_SESSION_SECRET).check_secret().is_ok());
    }

    #[test]
    fn test_dev_secret_refused_in_production() {
        let err = config_for("Production", DEV_SESSION_SECRET)
            .check_secret()
            .unwrap_err();
        assert!(matches!(err, AppError::MissingSessionSecret(_)));
    }

    #[test]
    fn test_custom_secret_allowed_in_production() {
        assert!(config_for("production", "s3cr3t").check_secret().is_ok());
    }
}
