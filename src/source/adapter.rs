use std::fmt;

use async_trait::async_trait;

use crate::core::country::Country;

/// Errors that can occur while loading the dataset.
/// None of them are retried; the caller logs and leaves the catalog empty.
#[derive(Debug)]
pub enum SourceError {
    /// Network-level failure (DNS, connection refused, TLS).
    Network(String),
    /// The endpoint answered with a non-success status.
    Api { status: u16, message: String },
    /// The body was not a JSON array of country records.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Returns the name of the source.
    fn name(&self) -> &str;

    /// Fetches the full dataset in load order.
    async fn fetch_all(&self) -> Result<Vec<Country>, SourceError>;
}
