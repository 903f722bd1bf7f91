//! Schema normalization into the canonical record.

use serde_json::{Map, Value};

use crate::{CardFields, CharacterRecord, Result, SourceCard};

/// Normalize a parsed payload into a [`CharacterRecord`].
///
/// Classifies the value as wrapped or flat, then applies the donor-field
/// mapping: `first_mes` becomes `first_message`, `creator_notes` fans out to
/// both `creator_notes` and `custom_instructions` (unless the source carried
/// its own), `description` falls back to `personality` when absent, and
/// unmapped keys are preserved under `extensions`.
///
/// The required-field contract is *not* enforced here; the import pipeline
/// checks the name after detail extraction has had its chance.
pub fn normalize(value: Value) -> Result<CharacterRecord> {
    let fields = SourceCard::detect(value)?.into_fields();
    Ok(from_fields(fields))
}

fn from_fields(fields: CardFields) -> CharacterRecord {
    let description = if fields.description.is_empty() {
        fields.personality.clone()
    } else {
        fields.description
    };

    let custom_instructions = fields
        .custom_instructions
        .unwrap_or_else(|| fields.creator_notes.clone());

    CharacterRecord {
        name: fields.name.unwrap_or_default(),
        avatar: fields.avatar,
        full_image: fields.full_image,
        description,
        personality: fields.personality,
        system_prompt: fields.system_prompt,
        custom_instructions,
        backstory: fields.backstory,
        first_message: fields.first_mes,
        message_example: fields.mes_example,
        scenario: fields.scenario,
        creator_notes: fields.creator_notes,
        alternate_greetings: fields.alternate_greetings,
        tags: fields.tags,
        creator: fields.creator,
        character_version: fields.character_version,
        extensions: merge_extensions(fields.extensions, fields.extra),
        age: fields.age,
        gender: fields.gender,
        race: fields.race,
        occupation: fields.occupation,
        likes: fields.likes,
        dislikes: fields.dislikes,
        status: fields.status,
        bookmarked: fields.bookmarked,
    }
}

/// Fold unmapped source keys into the `extensions` value. An explicit
/// `extensions` object from the source keeps its entries on key collisions.
fn merge_extensions(extensions: Option<Value>, extra: Map<String, Value>) -> Option<Value> {
    if extra.is_empty() {
        return extensions;
    }

    match extensions {
        Some(Value::Object(mut map)) => {
            for (key, value) in extra {
                map.entry(key).or_insert(value);
            }
            Some(Value::Object(map))
        }
        Some(other) => Some(other),
        None => Some(Value::Object(extra)),
    }
}
