//! PNG chunk-stream parsing for Kartka.
//!
//! Character-chat tools embed persona definitions inside ordinary PNG files
//! by stashing JSON in ancillary text chunks (`tEXt`, `zTXt`, `iTXt`). This
//! crate splits a PNG byte buffer into its chunk stream and decodes those
//! three chunk types into keyword/text records. It does not decode pixels
//! and it does not interpret the text.
//!
//! # File Format
//!
//! A PNG is an 8-byte signature followed by chunks of:
//! - 4 bytes: big-endian data length
//! - 4 bytes: ASCII type tag
//! - N bytes: data
//! - 4 bytes: CRC-32 over tag + data
//!
//! terminated by an `IEND` chunk. CRCs are read but not enforced (a mismatch
//! logs a warning), matching how lenient the tools producing these files are.
//!
//! # Example
//!
//! ```no_run
//! use kartka_png::{decode_text_chunks, PngContainer};
//!
//! let bytes = std::fs::read("card.png")?;
//! let container = PngContainer::parse(&bytes)?;
//! for record in decode_text_chunks(&container) {
//!     println!("{} [{}]: {} chars", record.keyword, record.kind, record.text.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod chunk;
mod container;
mod error;
mod text;

pub use chunk::{Chunk, ChunkHeader};
pub use container::{is_png, PngContainer, PNG_SIGNATURE};
pub use error::{Error, Result};
pub use text::{decode_text_chunks, TextChunkKind, TextRecord};

#[cfg(test)]
pub(crate) mod test_util {
    use std::io::Write;

    use flate2::write::ZlibEncoder;
    use flate2::Compression;

    use crate::container::PNG_SIGNATURE;

    /// Serialize one chunk with a correct CRC.
    pub fn raw_chunk(tag: [u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + data.len());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(&tag);
        out.extend_from_slice(data);

        let mut crc = flate2::Crc::new();
        crc.update(&tag);
        crc.update(data);
        out.extend_from_slice(&crc.sum().to_be_bytes());
        out
    }

    /// Assemble a minimal PNG: signature, 1x1 IHDR, the given chunks, IEND.
    pub fn build_png(chunks: &[Vec<u8>]) -> Vec<u8> {
        let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0];

        let mut out = PNG_SIGNATURE.to_vec();
        out.extend_from_slice(&raw_chunk(*b"IHDR", &ihdr));
        for chunk in chunks {
            out.extend_from_slice(chunk);
        }
        out.extend_from_slice(&raw_chunk(*b"IEND", &[]));
        out
    }

    /// Zlib-compress bytes the way zTXt/iTXt payloads are stored.
    pub fn deflate(data: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(data).unwrap();
        encoder.finish().unwrap()
    }
}
