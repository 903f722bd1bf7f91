//! Candidate selection over decoded text records.

use kartka_png::{TextChunkKind, TextRecord};

/// Scan order for text-chunk kinds. tEXt wins over zTXt wins over iTXt when
/// several chunks carry plausible payloads; changing this silently changes
/// which files import successfully.
const KIND_PRIORITY: [TextChunkKind; 3] = [
    TextChunkKind::Text,
    TextChunkKind::CompressedText,
    TextChunkKind::InternationalText,
];

/// Whether a record looks like it holds an embedded character payload.
///
/// Deliberately fuzzy, and kept exactly as the donor tools expect it: the
/// keyword mentions "chara" (which also covers "character") in any case, or
/// the text itself starts with `{`.
pub fn is_candidate(record: &TextRecord) -> bool {
    record.keyword.to_ascii_lowercase().contains("chara") || record.text.trim_start().starts_with('{')
}

/// All candidate records in fixed priority order: every tEXt record first,
/// then every zTXt, then every iTXt, keeping file order within each kind.
///
/// The full list is returned rather than the first match so the payload
/// parser can fall through a candidate that fails to decode.
pub fn select_candidates<'a>(records: &'a [TextRecord]) -> Vec<&'a TextRecord> {
    KIND_PRIORITY
        .iter()
        .flat_map(|kind| records.iter().filter(move |r| r.kind == *kind))
        .filter(|r| is_candidate(r))
        .collect()
}
