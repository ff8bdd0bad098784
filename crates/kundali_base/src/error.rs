//! Error types for chart construction and navamsa derivation.

use thiserror::Error;

use crate::graha::Graha;

/// Errors from rashi lookup, chart building, or navamsa derivation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Rashi lookup with a non-canonical index or name.
    #[error("invalid sign: {0}")]
    InvalidSign(String),
    /// Body name that is not one of the 9 grahas.
    #[error("invalid graha: {0}")]
    InvalidGraha(String),
    /// Longitude that is not finite or falls outside [0, 30).
    #[error("invalid longitude for {graha}: {value}")]
    InvalidLongitude { graha: Graha, value: f64 },
    /// Builder called with no positions.
    #[error("no body positions supplied")]
    EmptyPositions,
    /// Chart handed to the transformer is structurally invalid.
    #[error("malformed chart: {0}")]
    MalformedChart(&'static str),
}
