//! Error types for the HTTP backend setup.
//!
//! Request-time failures use `tasko_core::StoreError`; this module only
//! covers configuration and client construction.

use thiserror::Error;

/// Errors that can occur while configuring the HTTP store.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("invalid API base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
