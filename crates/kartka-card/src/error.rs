//! Error types for card import.

use thiserror::Error;

/// Errors that can fail an import attempt.
///
/// All of these are attempt-scoped: none of them poison the host beyond the
/// one-shot `Failed` session state, and none of them leak a partial record.
#[derive(Debug, Error)]
pub enum Error {
    /// The byte buffer is not a well-formed PNG chunk stream.
    #[error("malformed PNG container: {0}")]
    Container(#[from] kartka_png::Error),

    /// Every candidate failed direct and base64 decoding, or no chunk
    /// matched the candidate predicate at all.
    #[error("no valid character data found in file")]
    NoValidPayload,

    /// The payload parsed but does not match either known card schema.
    #[error("unrecognized character card schema")]
    UnknownSchema,

    /// Normalization succeeded but a required field is empty.
    #[error("character card is missing required field `{field}`")]
    MissingRequiredField { field: &'static str },

    /// Reading the input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session already failed for this file selection; it must be reset
    /// before another attempt.
    #[error("import session is in failed state, reset it before retrying")]
    SessionFailed,
}

/// Result type for card import operations.
pub type Result<T> = std::result::Result<T, Error>;
