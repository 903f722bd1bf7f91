//! Character-card recovery and normalization for Kartka.
//!
//! Character cards arrive either as plain JSON or as PNG images carrying a
//! JSON payload inside ancillary text chunks. This crate takes the decoded
//! keyword/text records from `kartka-png` the rest of the way: candidate
//! scanning, the direct/base64 payload fallback chain, normalization of the
//! two known source schemas into one canonical [`CharacterRecord`], and
//! detail extraction from free-text descriptions.
//!
//! # Example
//!
//! ```no_run
//! use kartka_card::ImportSession;
//!
//! let mut session = ImportSession::new();
//! let record = session.import_path("card.png")?;
//! println!("imported {}", record.name);
//! # Ok::<(), kartka_card::Error>(())
//! ```

mod candidate;
mod details;
mod error;
mod import;
mod normalize;
mod payload;
mod record;
mod schema;

pub use candidate::{is_candidate, select_candidates};
pub use details::{backfill_details, vocab, VOCAB_VERSION};
pub use error::{Error, Result};
pub use import::{detect_kind, ImportKind, ImportSession, ImportState};
pub use normalize::normalize;
pub use payload::parse_first_payload;
pub use record::CharacterRecord;
pub use schema::{CardFields, SourceCard};
