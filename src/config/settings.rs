//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_MIN_CONNECTIONS, DEFAULT_DATABASE_URL,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SESSION_EXPIRATION_HOURS,
    MIN_SESSION_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Development-only signing secret, used when `SESSION_SECRET` is unset in debug builds
const DEV_SESSION_SECRET: &str = "dev-session-secret-minimum-32-chars!!";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub database_min_connections: u32,
    session_secret: String,
    pub session_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("database_min_connections", &self.database_min_connections)
            .field("session_secret", &"[REDACTED]")
            .field("session_expiration_hours", &self.session_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything but the database and secret.
    ///
    /// # Errors
    /// Returns a validation error if the secret is shorter than
    /// [`MIN_SESSION_SECRET_LENGTH`].
    pub fn new(database_url: impl Into<String>, session_secret: impl Into<String>) -> AppResult<Self> {
        let session_secret = session_secret.into();
        if session_secret.len() < MIN_SESSION_SECRET_LENGTH {
            return Err(AppError::validation(format!(
                "SESSION_SECRET must be at least {} characters long",
                MIN_SESSION_SECRET_LENGTH
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            database_min_connections: DEFAULT_DATABASE_MIN_CONNECTIONS,
            session_secret,
            session_expiration_hours: DEFAULT_SESSION_EXPIRATION_HOURS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Load configuration from environment variables (and `.env`, if present).
    ///
    /// # Errors
    /// Fails if `SESSION_SECRET` is missing in a release build, or too short.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let session_secret = match env::var("SESSION_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("SESSION_SECRET not set, using insecure default for development");
                DEV_SESSION_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::validation(
                    "SESSION_SECRET environment variable must be set in production",
                ))
            }
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let mut config = Self::new(database_url, session_secret)?;
        config.database_max_connections = parse_env("DATABASE_MAX_CONNECTIONS")
            .unwrap_or(DEFAULT_DATABASE_MAX_CONNECTIONS);
        config.database_min_connections = parse_env("DATABASE_MIN_CONNECTIONS")
            .unwrap_or(DEFAULT_DATABASE_MIN_CONNECTIONS);
        config.session_expiration_hours = parse_env("SESSION_EXPIRATION_HOURS")
            .unwrap_or(DEFAULT_SESSION_EXPIRATION_HOURS);
        config.server_host =
            env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string());
        config.server_port = parse_env("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT);

        Ok(config)
    }

    /// Get session secret bytes for token signing/verification.
    pub fn session_secret_bytes(&self) -> &[u8] {
        self.session_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Unset keys and unparsable values both yield `None`; the latter is logged.
fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(key, value = %raw, "Unparsable environment variable, using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_secret_is_rejected() {
        let err = Config::new("sqlite::memory:", "too-short").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn new_applies_defaults() {
        let config = Config::new("sqlite::memory:", DEV_SESSION_SECRET).unwrap();
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
        assert_eq!(config.session_expiration_hours, DEFAULT_SESSION_EXPIRATION_HOURS);
        assert_eq!(config.server_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn unparsable_env_value_falls_back() {
        env::set_var("NOURISHNET_TEST_PORT_BAD", "eighty");
        env::set_var("NOURISHNET_TEST_PORT_GOOD", "8080");

        assert_eq!(parse_env::<u16>("NOURISHNET_TEST_PORT_BAD"), None);
        assert_eq!(parse_env::<u16>("NOURISHNET_TEST_PORT_GOOD"), Some(8080));
        assert_eq!(parse_env::<u16>("NOURISHNET_TEST_PORT_UNSET"), None);
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = Config::new("postgres://user:hunter2@db/app", DEV_SESSION_SECRET).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains(DEV_SESSION_SECRET));
    }
}
