//! Payload recovery from candidate text.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use kartka_png::TextRecord;
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// How much rejected-candidate text to keep in diagnostics.
const REJECT_LOG_CHARS: usize = 100;

/// Recover the first parseable payload from an ordered candidate list.
///
/// An explicit fallback chain per candidate: parse the text directly as
/// JSON, else strip whitespace, base64-decode, and parse the result, else
/// move on to the next candidate. The first success wins; exhausting the
/// list (or an empty list) is [`Error::NoValidPayload`].
pub fn parse_first_payload(candidates: &[&TextRecord]) -> Result<Value> {
    for candidate in candidates {
        if let Some(value) = parse_candidate(candidate) {
            return Ok(value);
        }

        let preview: String = candidate.text.chars().take(REJECT_LOG_CHARS).collect();
        debug!(
            keyword = %candidate.keyword,
            kind = %candidate.kind,
            preview = %preview,
            "candidate failed direct and base64 decoding"
        );
    }

    Err(Error::NoValidPayload)
}

fn parse_candidate(candidate: &TextRecord) -> Option<Value> {
    if let Ok(value) = serde_json::from_str(&candidate.text) {
        return Some(value);
    }

    let stripped: String = candidate
        .text
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    let decoded = BASE64.decode(stripped).ok()?;
    serde_json::from_slice(&decoded).ok()
}
