//! Common utilities for Kartka.
//!
//! This crate provides foundational types used across all Kartka crates:
//!
//! - [`BinaryReader`] - Zero-copy big-endian binary reading from byte slices
//! - [`Error`] / [`Result`] - The shared low-level error type

mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BinaryReader;

/// Re-export zerocopy traits for convenience
pub use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Re-export memchr for SIMD-accelerated byte searching
pub use memchr;
