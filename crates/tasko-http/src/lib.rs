//! HTTP store backend for tasko.
//!
//! Talks to a remote to-do collection over REST:
//! - `GET {base}/todos`: full collection
//! - `POST {base}/todos`: create, returns the new item
//! - `PATCH {base}/todos/{id}`: partial field update
//! - `DELETE {base}/todos/{id}`: delete

pub mod config;
pub mod error;
pub mod store;

pub use config::{StoreConfig, API_URL_ENV};
pub use error::ConfigError;
pub use store::HttpStore;
