//! Source card schemas.
//!
//! Two incompatible shapes are in the wild: a wrapper object carrying
//! `spec`/`spec_version` markers with the persona fields nested under `data`,
//! and a flat object holding the fields directly. Flat inputs are usually
//! already canonical but still show up with the donor tools' snake_case
//! field names, so every field accepts both spellings via serde aliases.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{Error, Result};

/// Loosely-typed persona fields as the donor tools name them.
///
/// Everything defaults so that sparse cards deserialize cleanly; keys not
/// named here are collected into [`CardFields::extra`] and preserved under
/// the canonical record's `extensions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardFields {
    /// Absent and empty are distinct from the validator's point of view, so
    /// the name stays optional here.
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub personality: String,
    #[serde(default)]
    pub scenario: String,
    #[serde(default, alias = "firstMessage", alias = "first_message")]
    pub first_mes: String,
    #[serde(default, alias = "messageExample", alias = "message_example")]
    pub mes_example: String,
    #[serde(default, alias = "systemPrompt")]
    pub system_prompt: String,
    #[serde(default, alias = "creatorNotes")]
    pub creator_notes: String,
    /// Only canonical flat inputs carry this; wrapped cards derive it from
    /// `creator_notes`.
    #[serde(default, alias = "customInstructions")]
    pub custom_instructions: Option<String>,
    #[serde(default)]
    pub backstory: String,
    #[serde(default, alias = "alternateGreetings")]
    pub alternate_greetings: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub creator: String,
    #[serde(default, alias = "characterVersion")]
    pub character_version: String,
    #[serde(default, alias = "job")]
    pub occupation: String,
    #[serde(
        default,
        alias = "background_image",
        alias = "fullImage",
        alias = "backgroundImage"
    )]
    pub full_image: String,
    #[serde(default)]
    pub extensions: Option<Value>,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub race: String,
    #[serde(default)]
    pub likes: String,
    #[serde(default)]
    pub dislikes: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub bookmarked: bool,
    /// Source fields with no canonical mapping.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parsed payload classified into one of the two known schemas.
#[derive(Debug, Clone)]
pub enum SourceCard {
    /// `{spec, spec_version, data: {...}}`
    Wrapped {
        spec: String,
        spec_version: String,
        fields: CardFields,
    },
    /// A bare field object.
    Flat(CardFields),
}

impl SourceCard {
    /// Classify a generic parsed value.
    ///
    /// The presence of a `spec` key selects the wrapped schema; it must then
    /// also carry an object-valued `data`, anything else is rejected rather
    /// than guessed at. A payload that is not an object at all is likewise
    /// rejected.
    pub fn detect(value: Value) -> Result<Self> {
        let Value::Object(mut map) = value else {
            return Err(Error::UnknownSchema);
        };

        if map.contains_key("spec") {
            let spec = take_string(&mut map, "spec");
            let spec_version = {
                let snake = take_string(&mut map, "spec_version");
                if snake.is_empty() {
                    take_string(&mut map, "specVersion")
                } else {
                    snake
                }
            };

            let data = map.remove("data").ok_or(Error::UnknownSchema)?;
            if !data.is_object() {
                return Err(Error::UnknownSchema);
            }

            debug!(spec = %spec, version = %spec_version, "detected wrapped card schema");
            let fields = deserialize_fields(data)?;
            Ok(Self::Wrapped {
                spec,
                spec_version,
                fields,
            })
        } else {
            debug!("detected flat card schema");
            deserialize_fields(Value::Object(map)).map(Self::Flat)
        }
    }

    /// The persona fields, discarding any wrapper metadata.
    pub fn into_fields(self) -> CardFields {
        match self {
            Self::Wrapped { fields, .. } | Self::Flat(fields) => fields,
        }
    }
}

fn deserialize_fields(value: Value) -> Result<CardFields> {
    serde_json::from_value(value).map_err(|err| {
        debug!(error = %err, "card fields failed to deserialize");
        Error::UnknownSchema
    })
}

fn take_string(map: &mut Map<String, Value>, key: &str) -> String {
    match map.remove(key) {
        Some(Value::String(s)) => s,
        _ => String::new(),
    }
}
