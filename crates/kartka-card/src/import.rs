//! The import pipeline and its session state machine.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use kartka_png::{decode_text_chunks, is_png, PngContainer};
use serde_json::Value;
use tracing::{debug, info};

use crate::candidate::select_candidates;
use crate::details::backfill_details;
use crate::normalize::normalize;
use crate::payload::parse_first_payload;
use crate::{CharacterRecord, Error, Result};

/// What kind of card file the input is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    /// PNG image with the card embedded in ancillary text chunks.
    Png,
    /// Plain JSON card.
    Json,
}

/// Where an import attempt currently stands.
///
/// `Failed` is sticky: the session refuses further attempts until the caller
/// resets it. One attempt per file selection keeps accidental double-submits
/// from racing each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportState {
    #[default]
    Idle,
    Reading,
    Parsing,
    Validating,
    Success,
    Failed,
}

/// Drives one import attempt at a time through
/// `Idle → Reading → Parsing → Validating → {Success | Failed}`.
///
/// The session owns no card data; it only tracks attempt state explicitly,
/// keyed to itself rather than stashed as a flag on some domain object.
#[derive(Debug, Default)]
pub struct ImportSession {
    state: ImportState,
}

impl ImportSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state of this session.
    pub fn state(&self) -> ImportState {
        self.state
    }

    /// Clear a terminal state so the session accepts a new file.
    pub fn reset(&mut self) {
        self.state = ImportState::Idle;
    }

    /// Read a card file from disk and import it.
    ///
    /// The file kind is detected from the PNG signature, falling back to the
    /// file extension; everything else is treated as JSON text.
    pub fn import_path<P: AsRef<Path>>(&mut self, path: P) -> Result<CharacterRecord> {
        self.guard()?;
        self.state = ImportState::Reading;

        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.state = ImportState::Failed;
                return Err(err.into());
            }
        };

        self.import_bytes(&bytes, detect_kind(&bytes, Some(path)))
    }

    /// Import a card from an in-memory buffer with a declared kind.
    pub fn import_bytes(&mut self, bytes: &[u8], kind: ImportKind) -> Result<CharacterRecord> {
        self.guard()?;

        let outcome = self.attempt(bytes, kind);
        self.state = match &outcome {
            Ok(record) => {
                info!(name = %record.name, ?kind, "character card imported");
                ImportState::Success
            }
            Err(err) => {
                debug!(error = %err, ?kind, "import attempt failed");
                ImportState::Failed
            }
        };
        outcome
    }

    fn guard(&self) -> Result<()> {
        if self.state == ImportState::Failed {
            return Err(Error::SessionFailed);
        }
        Ok(())
    }

    fn attempt(&mut self, bytes: &[u8], kind: ImportKind) -> Result<CharacterRecord> {
        self.state = ImportState::Parsing;

        let value = match kind {
            ImportKind::Png => extract_png_payload(bytes)?,
            ImportKind::Json => serde_json::from_slice(bytes).map_err(|err| {
                debug!(error = %err, "JSON card failed to parse");
                Error::NoValidPayload
            })?,
        };

        self.state = ImportState::Validating;
        let mut record = normalize(value)?;

        // The imported image becomes its own avatar, regardless of any
        // avatar field the embedded payload carried.
        if kind == ImportKind::Png {
            record.avatar = png_data_uri(bytes);
        }

        backfill_details(&mut record);

        if !record.has_name() {
            return Err(Error::MissingRequiredField { field: "name" });
        }
        Ok(record)
    }
}

/// Classify an input buffer, preferring the signature over the extension.
pub fn detect_kind(bytes: &[u8], path: Option<&Path>) -> ImportKind {
    if is_png(bytes) {
        return ImportKind::Png;
    }
    let by_extension = path
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("png"));
    if by_extension {
        ImportKind::Png
    } else {
        ImportKind::Json
    }
}

/// Run container parse, chunk decode, candidate scan, payload parse.
fn extract_png_payload(bytes: &[u8]) -> Result<Value> {
    let container = PngContainer::parse(bytes)?;
    let records = decode_text_chunks(&container);
    let candidates = select_candidates(&records);
    parse_first_payload(&candidates)
}

/// A locally-persistable encoding of the original file bytes.
fn png_data_uri(bytes: &[u8]) -> String {
    format!("data:image/png;base64,{}", BASE64.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // Minimal PNG assembly, mirroring what the card tools write.

    fn raw_chunk(tag: [u8; 4], data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        out.extend_from_slice(&tag);
        out.extend_from_slice(data);

        let mut crc = flate2::Crc::new();
        crc.update(&tag);
        crc.update(data);
        out.extend_from_slice(&crc.sum().to_be_bytes());
        out
    }

    fn build_png(chunks: &[Vec<u8>]) -> Vec<u8> {
        let ihdr = [0, 0, 0, 1, 0, 0, 0, 1, 8, 6, 0, 0, 0];
        let mut out = kartka_png::PNG_SIGNATURE.to_vec();
        out.extend_from_slice(&raw_chunk(*b"IHDR", &ihdr));
        for chunk in chunks {
            out.extend_from_slice(chunk);
        }
        out.extend_from_slice(&raw_chunk(*b"IEND", &[]));
        out
    }

    fn text_chunk(keyword: &str, text: &str) -> Vec<u8> {
        let mut payload = keyword.as_bytes().to_vec();
        payload.push(0);
        payload.extend_from_slice(text.as_bytes());
        raw_chunk(*b"tEXt", &payload)
    }

    fn ztxt_chunk(keyword: &str, text: &str) -> Vec<u8> {
        use std::io::Write;
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(text.as_bytes()).unwrap();

        let mut payload = keyword.as_bytes().to_vec();
        payload.extend_from_slice(&[0, 0]);
        payload.extend_from_slice(&encoder.finish().unwrap());
        raw_chunk(*b"zTXt", &payload)
    }

    #[test]
    fn test_png_import_end_to_end() {
        let card = json!({
            "spec": "chara_card_v2",
            "spec_version": "2.0",
            "data": {
                "name": "Mira",
                "description": "A half-elf ranger, 25 years old.",
                "first_mes": "Well met.",
                "avatar": "http://example.com/ignored.png"
            }
        });
        let png = build_png(&[text_chunk("chara", &card.to_string())]);

        let mut session = ImportSession::new();
        let record = session.import_bytes(&png, ImportKind::Png).unwrap();

        assert_eq!(record.name, "Mira");
        assert_eq!(record.first_message, "Well met.");
        // Details backfilled from the description.
        assert_eq!(record.age, "25");
        assert_eq!(record.race, "half-elf");
        // The original file bytes become the avatar, not the embedded URL.
        assert_eq!(record.avatar, png_data_uri(&png));
        assert_eq!(session.state(), ImportState::Success);
    }

    #[test]
    fn test_base64_payload_recovered() {
        let card = json!({ "name": "Mira" }).to_string();
        let encoded = BASE64.encode(card);
        let png = build_png(&[text_chunk("chara", &encoded)]);

        let mut session = ImportSession::new();
        let record = session.import_bytes(&png, ImportKind::Png).unwrap();
        assert_eq!(record.name, "Mira");
    }

    #[test]
    fn test_text_chunk_outranks_compressed() {
        // Both candidates parse; the tEXt one must win even though the zTXt
        // chunk comes first in the file.
        let png = build_png(&[
            ztxt_chunk("chara", &json!({ "name": "FromZtxt" }).to_string()),
            text_chunk("chara", &json!({ "name": "FromText" }).to_string()),
        ]);

        let mut session = ImportSession::new();
        let record = session.import_bytes(&png, ImportKind::Png).unwrap();
        assert_eq!(record.name, "FromText");
    }

    #[test]
    fn test_failed_candidate_defers_to_next() {
        let png = build_png(&[
            text_chunk("chara", "{broken json"),
            ztxt_chunk("chara", &json!({ "name": "Mira" }).to_string()),
        ]);

        let mut session = ImportSession::new();
        let record = session.import_bytes(&png, ImportKind::Png).unwrap();
        assert_eq!(record.name, "Mira");
    }

    #[test]
    fn test_no_valid_payload() {
        let png = build_png(&[text_chunk("software", "gimp 2.10")]);

        let mut session = ImportSession::new();
        assert!(matches!(
            session.import_bytes(&png, ImportKind::Png),
            Err(Error::NoValidPayload)
        ));
    }

    #[test]
    fn test_missing_name_rejected_both_schemas() {
        let flat = json!({ "description": "nameless" }).to_string();
        let wrapped = json!({ "spec": "x", "data": { "description": "nameless" } }).to_string();

        for card in [flat, wrapped] {
            let mut session = ImportSession::new();
            assert!(matches!(
                session.import_bytes(card.as_bytes(), ImportKind::Json),
                Err(Error::MissingRequiredField { field: "name" })
            ));
        }
    }

    #[test]
    fn test_failed_state_is_sticky_until_reset() {
        let mut session = ImportSession::new();
        assert!(session.import_bytes(b"not json", ImportKind::Json).is_err());
        assert_eq!(session.state(), ImportState::Failed);

        // Even a valid card is refused now.
        let good = json!({ "name": "Mira" }).to_string();
        assert!(matches!(
            session.import_bytes(good.as_bytes(), ImportKind::Json),
            Err(Error::SessionFailed)
        ));

        session.reset();
        assert!(session
            .import_bytes(good.as_bytes(), ImportKind::Json)
            .is_ok());
    }

    #[test]
    fn test_json_path_keeps_payload_avatar() {
        let card = json!({ "name": "Mira", "avatar": "avatars/mira.png" }).to_string();

        let mut session = ImportSession::new();
        let record = session.import_bytes(card.as_bytes(), ImportKind::Json).unwrap();
        assert_eq!(record.avatar, "avatars/mira.png");
    }

    #[test]
    fn test_malformed_png_container() {
        let mut png = kartka_png::PNG_SIGNATURE.to_vec();
        png.extend_from_slice(&9999u32.to_be_bytes());
        png.extend_from_slice(b"tEXt");

        let mut session = ImportSession::new();
        assert!(matches!(
            session.import_bytes(&png, ImportKind::Png),
            Err(Error::Container(_))
        ));
    }

    #[test]
    fn test_detect_kind() {
        let png = build_png(&[]);
        assert_eq!(detect_kind(&png, None), ImportKind::Png);
        assert_eq!(
            detect_kind(b"{}", Some(Path::new("card.json"))),
            ImportKind::Json
        );
        // Extension wins for a PNG-named file with a stripped signature.
        assert_eq!(
            detect_kind(b"", Some(Path::new("card.PNG"))),
            ImportKind::Png
        );
    }
}
