//! Error types for quickcap.

use thiserror::Error;

/// Errors surfaced by quickcap's library API.
///
/// The parser itself is total and never returns an error; this type covers
/// the surrounding surfaces (priority tokens, output serialization).
#[derive(Error, Debug)]
pub enum QuickcapError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A string did not name a valid priority (P1-P4).
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
}
