//! Error types for position feeds and chart requests.

use kundali_base::ChartError;
use thiserror::Error;

/// Errors from reading a position feed, validating a request, or building
/// the charts it describes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Chart construction or registry lookup failed.
    #[error("chart error: {0}")]
    Chart(#[from] ChartError),
    /// Position feed or request JSON could not be parsed.
    #[error("feed parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Configuration TOML could not be parsed.
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Birth request fields out of range or unparseable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
