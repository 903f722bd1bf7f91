//! Kartka - character-card import library.
//!
//! This crate provides a unified interface to the Kartka library ecosystem
//! for recovering persona definitions from character-card files.
//!
//! # Crates
//!
//! - [`kartka_common`] - Common utilities (big-endian binary reading)
//! - [`kartka_png`] - PNG chunk-stream parsing and text-chunk decoding
//! - [`kartka_card`] - Payload recovery, schema normalization, import pipeline
//!
//! # Example
//!
//! ```no_run
//! use kartka::prelude::*;
//!
//! let mut session = ImportSession::new();
//! match session.import_path("card.png") {
//!     Ok(record) => println!("imported {}", record.name),
//!     Err(err) => eprintln!("import failed: {err}"),
//! }
//! ```

// Re-export all sub-crates
pub use kartka_card as card;
pub use kartka_common as common;
pub use kartka_png as png;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use kartka_card::{
        CharacterRecord, Error as CardError, ImportKind, ImportSession, ImportState,
    };
    pub use kartka_common::BinaryReader;
    pub use kartka_png::{decode_text_chunks, PngContainer, TextChunkKind, TextRecord};
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
