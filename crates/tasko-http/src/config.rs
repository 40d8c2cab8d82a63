//! Store configuration.

use crate::error::ConfigError;
use std::time::Duration;
use url::Url;

/// Environment variable supplying the API base URL.
pub const API_URL_ENV: &str = "TASKO_API_URL";

/// Base URL used when the environment supplies none.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the HTTP store, resolved once at startup.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    base_url: String,
    timeout: Duration,
}

impl StoreConfig {
    /// Create a config from an API base URL.
    ///
    /// The URL is validated and any trailing slash is dropped so endpoint
    /// paths can be appended uniformly.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidUrl` if the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ConfigError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Create a config from the `TASKO_API_URL` environment variable,
    /// falling back to [`DEFAULT_API_URL`] when unset.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidUrl` if the variable holds an
    /// unparseable URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&url)
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The normalized base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }
}
