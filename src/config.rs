//! Configuration Module
//!
//! Handles loading the explorer's configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Explorer configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Age in seconds after which cached responses are reaped (also the sweep period)
    pub cache_ttl: u64,
    /// Root of the PokeAPI, without a trailing slash
    pub base_url: String,
    /// Per-request HTTP timeout in seconds
    pub http_timeout: u64,
    /// Number of location areas listed per `map` page
    pub page_size: u32,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_SECS` - Cache entry lifetime, non-zero (default: 300)
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout, non-zero (default: 30)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_var("CACHE_TTL_SECS")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.cache_ttl),
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|url| url.trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout: parse_var("HTTP_TIMEOUT_SECS")
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.http_timeout),
            page_size: parse_var("PAGE_SIZE")
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
        }
    }

    /// Cache TTL as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a `Duration`.
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 300,
            base_url: "https://pokeapi.co/api/v2".to_string(),
            http_timeout: 30,
            page_size: 20,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
