//! Detail extraction from free-text descriptions.
//!
//! Cards frequently bury structured facts (age, gender, occupation, a
//! greeting) inside the prose description instead of filling the dedicated
//! fields. [`backfill_details`] recovers them with ordered regex probes over
//! the description, filling only slots that are still empty. A field already
//! populated by structured data is never touched, and each probe is
//! first-match-wins.

pub mod vocab;

use std::sync::OnceLock;

use regex::Regex;

use crate::CharacterRecord;

pub use vocab::VOCAB_VERSION;

/// Backfill still-empty descriptive fields from `description`.
///
/// Probes run in a fixed order (age, gender, race, occupation, likes,
/// dislikes, first message); each is independent of the others.
pub fn backfill_details(record: &mut CharacterRecord) {
    if record.description.is_empty() {
        return;
    }
    let text = record.description.clone();

    fill(&mut record.age, || extract_age(&text));
    fill(&mut record.gender, || extract_match(gender_re(), &text));
    fill(&mut record.race, || extract_match(race_re(), &text));
    fill(&mut record.occupation, || extract_match(occupation_re(), &text));
    fill(&mut record.likes, || extract_capture(likes_re(), &text));
    fill(&mut record.dislikes, || extract_capture(dislikes_re(), &text));
    fill(&mut record.first_message, || {
        extract_capture(first_message_re(), &text)
    });
}

fn fill(slot: &mut String, probe: impl FnOnce() -> Option<String>) {
    if slot.is_empty() {
        if let Some(value) = probe() {
            *slot = value;
        }
    }
}

/// Try the age patterns in priority order; the first capture wins.
fn extract_age(text: &str) -> Option<String> {
    age_patterns()
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].to_string())
}

/// First whole match of a vocabulary regex, lowercased for consistency.
fn extract_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_ascii_lowercase())
}

/// First capture group of a trigger-phrase regex, trimmed.
fn extract_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|s| !s.is_empty())
}

fn age_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            r"(?i)\b(\d{1,3})\s*(?:years\s+old|yo\b|y\.o\.|age\b|aged\b)",
            r"(?i)\bage\s*:\s*(\d{1,3})",
            r"(?i)\baged\s+(\d{1,3})",
            r"(?i)\b(\d{1,3})\s*(?:years\b|yrs\b)",
        ]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
    })
}

fn gender_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&vocab_pattern(vocab::GENDERS)).unwrap())
}

fn race_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&vocab_pattern(vocab::RACES)).unwrap())
}

fn occupation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&vocab_pattern(vocab::OCCUPATIONS)).unwrap())
}

fn likes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&trigger_pattern(vocab::LIKE_TRIGGERS)).unwrap())
}

fn dislikes_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&trigger_pattern(vocab::DISLIKE_TRIGGERS)).unwrap())
}

fn first_message_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&trigger_pattern(vocab::FIRST_MESSAGE_TRIGGERS)).unwrap())
}

/// Whole-word alternation over a vocabulary list.
fn vocab_pattern(words: &[&str]) -> String {
    format!(r"(?i)\b(?:{})\b", alternation(words))
}

/// Trigger phrase followed by a colon; captures the rest of the sentence.
fn trigger_pattern(triggers: &[&str]) -> String {
    format!(r"(?i)\b(?:{})\s*:\s*([^.\n]+)", alternation(triggers))
}

fn alternation(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| w.replace(' ', r"\s+"))
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_description(text: &str) -> CharacterRecord {
        CharacterRecord {
            name: "Foo".into(),
            description: text.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_age_from_years_old() {
        let mut record = with_description("Mira is 25 years old and restless.");
        backfill_details(&mut record);
        assert_eq!(record.age, "25");
    }

    #[test]
    fn test_age_colon_form() {
        let mut record = with_description("Age: 104. An elf of few words.");
        backfill_details(&mut record);
        assert_eq!(record.age, "104");
        assert_eq!(record.race, "elf");
    }

    #[test]
    fn test_age_pattern_priority() {
        // "30 years old" outranks the bare "12 years" mention.
        let mut record =
            with_description("After 12 years at sea she is 30 years old now.");
        backfill_details(&mut record);
        assert_eq!(record.age, "30");
    }

    #[test]
    fn test_populated_age_is_kept() {
        let mut record = with_description("She is 25 years old.");
        record.age = "30".into();
        backfill_details(&mut record);
        assert_eq!(record.age, "30");
    }

    #[test]
    fn test_gender_word_boundary() {
        // "female" must not read as "male".
        let mut record = with_description("A female pirate with a grudge.");
        backfill_details(&mut record);
        assert_eq!(record.gender, "female");
        assert_eq!(record.occupation, "pirate");
    }

    #[test]
    fn test_compound_race_wins() {
        let mut record = with_description("A half-elf ranger from the border woods.");
        backfill_details(&mut record);
        assert_eq!(record.race, "half-elf");
        assert_eq!(record.occupation, "ranger");
    }

    #[test]
    fn test_likes_and_dislikes_capture() {
        let mut record = with_description(
            "Likes: rainy mornings, black tea. Dislikes: crowds and small talk.",
        );
        backfill_details(&mut record);
        assert_eq!(record.likes, "rainy mornings, black tea");
        assert_eq!(record.dislikes, "crowds and small talk");
    }

    #[test]
    fn test_dislikes_does_not_feed_likes() {
        let mut record = with_description("Dislikes: rain.");
        backfill_details(&mut record);
        assert_eq!(record.likes, "");
        assert_eq!(record.dislikes, "rain");
    }

    #[test]
    fn test_first_message_trigger() {
        let mut record = with_description("Greeting: Well met, traveler");
        backfill_details(&mut record);
        assert_eq!(record.first_message, "Well met, traveler");
    }

    #[test]
    fn test_empty_description_is_noop() {
        let mut record = CharacterRecord::default();
        backfill_details(&mut record);
        assert_eq!(record, CharacterRecord::default());
    }
}
