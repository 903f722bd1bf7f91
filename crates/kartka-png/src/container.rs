//! PNG container walking.

use kartka_common::BinaryReader;
use tracing::warn;

use crate::{Chunk, ChunkHeader, Error, Result};

/// The 8-byte PNG file signature.
pub const PNG_SIGNATURE: &[u8; 8] = b"\x89PNG\r\n\x1a\n";

/// Check if data starts with the PNG signature.
pub fn is_png(data: &[u8]) -> bool {
    data.len() >= PNG_SIGNATURE.len() && &data[..PNG_SIGNATURE.len()] == PNG_SIGNATURE
}

/// A parsed PNG chunk stream.
///
/// Holds the ordered chunk list exactly as it appears in the file. No
/// semantic interpretation happens here; pixel data chunks pass through
/// unread alongside the text chunks Kartka cares about.
#[derive(Debug, Clone)]
pub struct PngContainer {
    chunks: Vec<Chunk>,
}

impl PngContainer {
    /// Parse a PNG chunk stream from bytes.
    ///
    /// Walks `[length][tag][data][crc]` chunks using the declared length to
    /// find each boundary, stopping at `IEND` (or at the end of the buffer
    /// for trailer-less files). Chunk CRCs are compared against the data but
    /// a mismatch only logs a warning; lenient reads keep cards importable
    /// from files other tools rewrote without fixing checksums.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if !is_png(data) {
            return Err(Error::MissingSignature {
                actual: data[..PNG_SIGNATURE.len().min(data.len())].to_vec(),
            });
        }

        let mut reader = BinaryReader::new_at(data, PNG_SIGNATURE.len());
        let mut chunks = Vec::new();

        while reader.remaining() >= ChunkHeader::SIZE {
            let header: ChunkHeader = reader.read_struct()?;
            let length = header.length.get() as usize;

            if length + ChunkHeader::CRC_SIZE > reader.remaining() {
                return Err(Error::ChunkOverrun {
                    tag: String::from_utf8_lossy(&header.tag).into_owned(),
                    declared: length,
                    available: reader.remaining().saturating_sub(ChunkHeader::CRC_SIZE),
                });
            }

            let data = reader.read_bytes(length)?.to_vec();
            let crc = reader.read_u32()?;

            let mut check = flate2::Crc::new();
            check.update(&header.tag);
            check.update(&data);
            if check.sum() != crc {
                warn!(
                    tag = %String::from_utf8_lossy(&header.tag),
                    declared = crc,
                    computed = check.sum(),
                    "chunk CRC mismatch, continuing"
                );
            }

            let is_end = header.tag == Chunk::IMAGE_END;
            chunks.push(Chunk {
                tag: header.tag,
                data,
                crc,
            });

            if is_end {
                break;
            }
        }

        Ok(Self { chunks })
    }

    /// The ordered chunk list.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Iterate over chunks of a specific type, in file order.
    pub fn chunks_of(&self, tag: [u8; 4]) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(move |c| c.tag == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{build_png, raw_chunk};

    #[test]
    fn test_walks_chunks_in_order() {
        let png = build_png(&[
            raw_chunk(*b"tEXt", b"chara\0{}"),
            raw_chunk(*b"zTXt", b"x\0\0junk"),
        ]);

        let container = PngContainer::parse(&png).unwrap();
        let tags: Vec<String> = container.chunks().iter().map(|c| c.tag_str()).collect();
        assert_eq!(tags, ["IHDR", "tEXt", "zTXt", "IEND"]);
    }

    #[test]
    fn test_missing_signature() {
        let err = PngContainer::parse(b"not a png at all").unwrap_err();
        assert!(matches!(err, Error::MissingSignature { .. }));
    }

    #[test]
    fn test_length_overrun() {
        let mut png = PNG_SIGNATURE.to_vec();
        // Declares 1000 data bytes but the buffer ends after the tag.
        png.extend_from_slice(&1000u32.to_be_bytes());
        png.extend_from_slice(b"tEXt");

        let err = PngContainer::parse(&png).unwrap_err();
        assert!(matches!(err, Error::ChunkOverrun { declared: 1000, .. }));
    }

    #[test]
    fn test_bad_crc_is_not_fatal() {
        let mut png = build_png(&[raw_chunk(*b"tEXt", b"chara\0{}")]);
        // Corrupt the last CRC byte of the tEXt chunk (IEND follows, 12 bytes).
        let n = png.len();
        png[n - 13] ^= 0xFF;

        let container = PngContainer::parse(&png).unwrap();
        assert_eq!(container.chunks_of(Chunk::TEXT).count(), 1);
    }

    #[test]
    fn test_stops_at_iend() {
        let mut png = build_png(&[raw_chunk(*b"tEXt", b"chara\0{}")]);
        png.extend_from_slice(b"trailing garbage after IEND");

        let container = PngContainer::parse(&png).unwrap();
        assert_eq!(container.chunks().last().unwrap().tag, Chunk::IMAGE_END);
    }
}
