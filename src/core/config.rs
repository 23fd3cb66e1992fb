//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Server-side configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the ticketing REST backend the `/api` proxy forwards to.
    /// Example: https://api.eventra.internal
    pub backend_url: Option<String>,

    /// Per-request timeout for proxied calls, in seconds.
    pub proxy_timeout_secs: u64,
}

/// Default proxy timeout when `PROXY_TIMEOUT_SECS` is unset or unparsable.
const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            backend_url: std::env::var("BACKEND_API_URL").ok(),
            proxy_timeout_secs: std::env::var("PROXY_TIMEOUT_SECS")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    }

    /// Check if a backend is configured
    pub fn has_backend(&self) -> bool {
        self.backend_url.is_some()
    }

    /// Get the backend URL or panic with a helpful message
    pub fn backend_url_or_panic(&self) -> &str {
        self.backend_url
            .as_deref()
            .expect("BACKEND_API_URL environment variable is not set")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Config Struct Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_config_with_backend() {
        let config = Config {
            backend_url: Some("https://api.example.com".to_string()),
            proxy_timeout_secs: 10,
        };

        assert!(config.has_backend());
        assert_eq!(config.backend_url_or_panic(), "https://api.example.com");
        assert_eq!(config.proxy_timeout_secs, 10);
    }

    #[test]
    fn test_config_without_backend() {
        let config = Config {
            backend_url: None,
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        };

        assert!(!config.has_backend());
    }

    #[test]
    #[should_panic(expected = "BACKEND_API_URL environment variable is not set")]
    fn test_backend_url_or_panic_failure() {
        let config = Config {
            backend_url: None,
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        };

        config.backend_url_or_panic();
    }
}
