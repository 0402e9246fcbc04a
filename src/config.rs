//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// OpenWeatherMap current-weather API base URL.
pub const OPENWEATHERMAP_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap API key (opaque credential, only read by the live provider)
    pub api_key: Option<String>,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached weather entries
    pub cache_ttl: u64,
    /// Upstream request timeout in seconds
    pub request_timeout: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Serve fixed mock data instead of calling the live provider
    pub test_mode: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `OPENWEATHERMAP_API_KEY` - Provider credential (no default)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `CACHE_DEFAULT_TTL` - Weather cache TTL in seconds (default: 900)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 10)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `TEST_MODE` - Use the mock provider when "true" (default: false)
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("OPENWEATHERMAP_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            cache_ttl: env::var("CACHE_DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(900),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            test_mode: env::var("TEST_MODE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            server_port: 5000,
            cache_ttl: 900,
            request_timeout: 10,
            cleanup_interval: 60,
            test_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.cleanup_interval, 60);
        assert!(!config.test_mode);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("OPENWEATHERMAP_API_KEY");
        env::remove_var("SERVER_PORT");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("REQUEST_TIMEOUT");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("TEST_MODE");

        let config = Config::from_env();
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.cache_ttl, 900);
        assert_eq!(config.request_timeout, 10);
        assert!(!config.test_mode);
    }
}
