//! JSON request helper for pages served by the application backend.
//!
//! [`HttpClient`] resolves paths against the page origin, merges per-call
//! [`RequestOptions`] over the configured defaults and parses every response
//! body as JSON.
//!
//! # Header overrides
//! The merge is shallow. Supplying a header map replaces the default map
//! entirely, including its `Content-Type: application/json` entry:
//!
//! ```
//! use pagekit_bridge::config::HttpConfig;
//! use pagekit_http::{HttpClient, RequestOptions};
//!
//! let client = HttpClient::new("https://app.example.com", HttpConfig::default()).unwrap();
//! let prepared = client
//!     .prepare("/api/items", RequestOptions::new().headers([("X-Foo", "1")]))
//!     .unwrap();
//! assert_eq!(prepared.config.headers.len(), 1);
//! assert!(!prepared.config.headers.contains_key("Content-Type"));
//! ```

mod client;
mod config;
mod error;

pub use client::{HttpClient, PreparedRequest};
pub use config::{RequestConfig, RequestOptions};
pub use error::HttpError;
pub use reqwest::Method;
