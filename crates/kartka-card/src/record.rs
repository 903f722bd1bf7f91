//! The canonical character record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single canonical persona representation, independent of which source
/// schema (or file kind) the card arrived in.
///
/// This is the only type that crosses the import subsystem boundary outward.
/// String fields default to empty rather than absent, array fields to empty
/// vectors; `extensions` holds unmapped source fields verbatim. Serialized
/// field names are camelCase, matching the wire contract of the surrounding
/// application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterRecord {
    /// Display name. The one required field: an import with an empty name
    /// is rejected, never partially persisted.
    pub name: String,
    /// Avatar image reference. For PNG imports this is always a data-URI
    /// encoding of the imported file itself.
    pub avatar: String,
    pub full_image: String,
    pub description: String,
    pub personality: String,
    pub system_prompt: String,
    pub custom_instructions: String,
    pub backstory: String,
    pub first_message: String,
    pub message_example: String,
    pub scenario: String,
    pub creator_notes: String,
    pub alternate_greetings: Vec<String>,
    pub tags: Vec<String>,
    pub creator: String,
    pub character_version: String,
    /// Unmapped source fields, preserved verbatim. `None` when the source
    /// carried nothing beyond the known fields.
    pub extensions: Option<Value>,
    pub age: String,
    pub gender: String,
    pub race: String,
    pub occupation: String,
    pub likes: String,
    pub dislikes: String,
    pub status: String,
    pub bookmarked: bool,
}

impl CharacterRecord {
    /// Whether the record satisfies the required-field contract.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let record = CharacterRecord {
            name: "Foo".into(),
            system_prompt: "bar".into(),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "Foo");
        assert_eq!(json["systemPrompt"], "bar");
        assert_eq!(json["alternateGreetings"], serde_json::json!([]));
        assert_eq!(json["extensions"], Value::Null);
        assert_eq!(json["bookmarked"], false);
    }

    #[test]
    fn test_has_name_rejects_whitespace() {
        let record = CharacterRecord {
            name: "   ".into(),
            ..Default::default()
        };
        assert!(!record.has_name());
    }
}
