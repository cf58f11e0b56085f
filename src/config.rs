//! Configuration Module
//!
//! Loads server and client settings from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::{DEFAULT_CACHE_EXPIRY, DEFAULT_MAX_CACHE_SIZE};
use crate::models::DEFAULT_PER_PAGE;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// HMAC secret for bearer tokens; login fails while unset
    pub jwt_secret: Option<String>,
    /// Lifetime of issued tokens in hours
    pub token_ttl_hours: i64,
    /// Page size for listings that do not request one
    pub default_per_page: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3001)
    /// - `JWT_SECRET` - Token signing secret (default: unset)
    /// - `TOKEN_TTL_HOURS` - Token lifetime in hours (default: 24)
    /// - `DEFAULT_PER_PAGE` - Listing page size (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            jwt_secret: env::var("JWT_SECRET").ok().filter(|s| !s.is_empty()),
            token_ttl_hours: env_or("TOKEN_TTL_HOURS", defaults.token_ttl_hours),
            default_per_page: env_or("DEFAULT_PER_PAGE", defaults.default_per_page),
        }
    }

    /// Default configuration with a signing secret, for tests and local runs.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: Some(secret.into()),
            ..Self::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3001,
            jwt_secret: None,
            token_ttl_hours: 24,
            default_per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Client-side settings for [`crate::client::NotesClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend root, e.g. `http://localhost:3001`
    pub base_url: String,
    /// Notes per page requested from the backend
    pub per_page: u32,
    /// Pages kept in the page cache
    pub max_cache_size: usize,
    /// Lifetime of a cached page
    pub cache_expiry: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Reads `NOTES_API_URL`, keeping the default for everything else.
    pub fn from_env() -> Self {
        match env::var("NOTES_API_URL") {
            Ok(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            per_page: DEFAULT_PER_PAGE,
            max_cache_size: DEFAULT_MAX_CACHE_SIZE,
            cache_expiry: DEFAULT_CACHE_EXPIRY,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok(), default)
}

/// Parses a raw setting, keeping `default` when it is absent or unparseable.
fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3001);
        assert!(config.jwt_secret.is_none());
        assert_eq!(config.token_ttl_hours, 24);
        assert_eq!(config.default_per_page, 10);
    }

    #[test]
    fn test_config_with_secret() {
        let config = Config::with_secret("s3cret");
        assert_eq!(config.jwt_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.server_port, 3001);
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.per_page, 10);
        assert_eq!(config.max_cache_size, 5);
        assert_eq!(config.cache_expiry, Duration::from_secs(300));
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        assert_eq!(parse_or(None, 3001u16), 3001);
        assert_eq!(parse_or(Some("not-a-number".into()), 3001u16), 3001);
        assert_eq!(parse_or(Some(String::new()), 24i64), 24);
        assert_eq!(parse_or(Some("8080".into()), 3001u16), 8080);
        assert_eq!(parse_or(Some(" -1 ".into()), 24i64), -1);
    }
}
