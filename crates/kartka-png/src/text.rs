//! Ancillary text-chunk decoding.
//!
//! Converts `tEXt`, `zTXt`, and `iTXt` chunks into keyword/text records.
//! The three types diverge on encoding: `tEXt` and `zTXt` are Latin-1 with
//! `zTXt` zlib-compressed, while `iTXt` carries UTF-8 plus language metadata
//! and compresses only when its flag byte says so.
//!
//! Decoding is chunk-local: a bad zlib stream or a truncated field drops (or
//! empties) that one record and never aborts the pass.

use std::io::Read;

use flate2::read::ZlibDecoder;
use kartka_common::BinaryReader;
use tracing::debug;

use crate::{Chunk, PngContainer};

/// Which chunk type a text record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TextChunkKind {
    /// `tEXt`
    Text,
    /// `zTXt`
    CompressedText,
    /// `iTXt`
    InternationalText,
}

impl std::fmt::Display for TextChunkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "tEXt"),
            Self::CompressedText => write!(f, "zTXt"),
            Self::InternationalText => write!(f, "iTXt"),
        }
    }
}

/// A decoded keyword/text pair.
#[derive(Debug, Clone)]
pub struct TextRecord {
    /// The chunk keyword (e.g. `chara` for embedded character cards).
    pub keyword: String,
    /// The decoded text payload. Empty when the chunk's compressed stream
    /// failed to inflate.
    pub text: String,
    /// The chunk type this record was decoded from.
    pub kind: TextChunkKind,
}

/// Decode every text-bearing chunk in the container, in file order.
///
/// Chunks that are structurally truncated (no keyword terminator, missing
/// method bytes) are skipped; chunks whose compressed payload fails to
/// inflate yield a record with empty text.
pub fn decode_text_chunks(container: &PngContainer) -> Vec<TextRecord> {
    container
        .chunks()
        .iter()
        .filter_map(|chunk| match chunk.tag {
            Chunk::TEXT => decode_text(&chunk.data),
            Chunk::COMPRESSED_TEXT => decode_compressed_text(&chunk.data),
            Chunk::INTERNATIONAL_TEXT => decode_international_text(&chunk.data),
            _ => None,
        })
        .collect()
}

/// `tEXt`: keyword, NUL, Latin-1 text.
fn decode_text(data: &[u8]) -> Option<TextRecord> {
    let mut reader = BinaryReader::new(data);
    let keyword = latin1(reader.read_null_delimited().ok()?);

    Some(TextRecord {
        keyword,
        text: latin1(reader.remaining_bytes()),
        kind: TextChunkKind::Text,
    })
}

/// `zTXt`: keyword, NUL, method byte, zlib-compressed Latin-1 text.
fn decode_compressed_text(data: &[u8]) -> Option<TextRecord> {
    let mut reader = BinaryReader::new(data);
    let keyword = latin1(reader.read_null_delimited().ok()?);
    let method = reader.read_u8().ok()?;

    // Method 0 (zlib/DEFLATE) is the only defined compression method.
    let text = if method == 0 {
        inflate(reader.remaining_bytes())
            .map(|bytes| latin1(&bytes))
            .unwrap_or_else(|| {
                debug!(keyword = %keyword, "zTXt inflate failed, keeping empty text");
                String::new()
            })
    } else {
        debug!(keyword = %keyword, method, "unsupported zTXt compression method");
        String::new()
    };

    Some(TextRecord {
        keyword,
        text,
        kind: TextChunkKind::CompressedText,
    })
}

/// `iTXt`: keyword, NUL, compression flag, compression method, language tag,
/// NUL, translated keyword, NUL, UTF-8 text (compressed when flag=1/method=0).
fn decode_international_text(data: &[u8]) -> Option<TextRecord> {
    let mut reader = BinaryReader::new(data);
    let keyword = latin1(reader.read_null_delimited().ok()?);
    let flag = reader.read_u8().ok()?;
    let method = reader.read_u8().ok()?;
    let _language = reader.read_null_delimited().ok()?;
    let _translated = reader.read_null_delimited().ok()?;

    let rest = reader.remaining_bytes();
    let text = if flag == 1 && method == 0 {
        inflate(rest)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_else(|| {
                debug!(keyword = %keyword, "iTXt inflate failed, keeping empty text");
                String::new()
            })
    } else {
        String::from_utf8_lossy(rest).into_owned()
    };

    Some(TextRecord {
        keyword,
        text,
        kind: TextChunkKind::InternationalText,
    })
}

/// Promote Latin-1 bytes to a string, one char per byte.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Inflate a zlib stream into a byte vector.
fn inflate(data: &[u8]) -> Option<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut output = Vec::new();
    decoder.read_to_end(&mut output).ok()?;
    Some(output)
}
