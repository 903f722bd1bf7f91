//! PNG chunk structures.

use zerocopy::byteorder::big_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// Fixed chunk header preceding each chunk's data.
///
/// PNG stores the length and type tag big-endian; the 4-byte CRC trails the
/// data and is not part of this header.
#[derive(Debug, Clone, Copy, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
pub struct ChunkHeader {
    /// Length of the chunk data (excludes tag and CRC).
    pub length: U32,
    /// Four-byte ASCII chunk type tag.
    pub tag: [u8; 4],
}

impl ChunkHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 8;

    /// Size of the trailing CRC field in bytes.
    pub const CRC_SIZE: usize = 4;
}

/// A single chunk lifted out of the container.
///
/// Chunks are produced once per container walk and never mutated. The CRC is
/// carried along for diagnostics but is not enforced.
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Four-byte ASCII chunk type tag.
    pub tag: [u8; 4],
    /// The chunk data bytes.
    pub data: Vec<u8>,
    /// CRC-32 as declared in the file.
    pub crc: u32,
}

impl Chunk {
    /// Uncompressed keyword/text chunk.
    pub const TEXT: [u8; 4] = *b"tEXt";
    /// Zlib-compressed keyword/text chunk.
    pub const COMPRESSED_TEXT: [u8; 4] = *b"zTXt";
    /// International (UTF-8, optionally compressed) keyword/text chunk.
    pub const INTERNATIONAL_TEXT: [u8; 4] = *b"iTXt";
    /// Image trailer, terminates the chunk stream.
    pub const IMAGE_END: [u8; 4] = *b"IEND";

    /// The tag as a display string (lossy for non-ASCII tags).
    pub fn tag_str(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }

    /// Whether this chunk type carries keyword/text metadata.
    pub fn is_text_bearing(&self) -> bool {
        matches!(
            self.tag,
            Self::TEXT | Self::COMPRESSED_TEXT | Self::INTERNATIONAL_TEXT
        )
    }
}
