//! Error taxonomy for the analysis core

use thiserror::Error;

/// Errors surfaced by analysis and accompaniment operations
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The audio source could not be opened, parsed or decoded
    #[error("audio source unavailable: {0}")]
    SourceUnavailable(String),

    /// An accompaniment request referenced a malformed note record
    #[error("malformed input note: {0}")]
    MalformedNote(String),

    /// Internal invariant violated - programming error, fatal to this request only
    #[error("internal invariant violated: {0}")]
    Invariant(String),

    /// I/O failure while staging transient audio bytes
    #[error("staging I/O failed")]
    Io(#[from] std::io::Error),
}
