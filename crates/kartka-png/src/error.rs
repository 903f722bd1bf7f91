//! Error types for PNG container parsing.

use thiserror::Error;

/// Errors that can occur when walking a PNG chunk stream.
///
/// These cover the *container* only. Failures inside an individual text
/// chunk (bad zlib stream, truncated iTXt fields) are deliberately not
/// errors: the offending chunk simply contributes no text record.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer does not start with the 8-byte PNG signature.
    #[error("missing PNG signature: got {actual:?}")]
    MissingSignature { actual: Vec<u8> },

    /// A chunk's declared length runs past the end of the buffer.
    #[error("chunk {tag} overruns buffer: declared {declared} bytes, {available} available")]
    ChunkOverrun {
        tag: String,
        declared: usize,
        available: usize,
    },

    /// Common library error (truncated header fields, etc.).
    #[error("{0}")]
    Common(#[from] kartka_common::Error),
}

/// Result type for PNG container operations.
pub type Result<T> = std::result::Result<T, Error>;
