//! Error types for strict frame parsing.

use thiserror::Error;

/// Errors from parsing a frame name where a silent fallback is not wanted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Input was empty or whitespace only
    #[error("Empty frame name")]
    Empty,

    /// No alias matched
    #[error("Unknown frame: {0}")]
    Unknown(String),
}

/// Result type alias for frame operations
pub type FrameResult<T> = Result<T, FrameError>;
