//! Error types for the chart configuration boundary.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from decoding or validating persisted chart configuration.
///
/// The engine itself is total; these only arise at the persistence
/// boundary or when a caller opts into range validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Persisted configuration JSON could not be decoded.
    ConfigDecode(String),
    /// A star channel's start lies outside 1..9.
    StarOutOfRange {
        /// Channel name (`blacks`, `reds`, `blues`, `purples`).
        channel: &'static str,
        /// The offending start value.
        start: i32,
    },
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigDecode(msg) => write!(f, "config decode error: {msg}"),
            Self::StarOutOfRange { channel, start } => {
                write!(f, "{channel} start {start} outside 1..9")
            }
        }
    }
}

impl Error for ChartError {}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigDecode(e.to_string())
    }
}
