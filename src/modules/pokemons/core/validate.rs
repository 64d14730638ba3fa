// Structural validation of client supplied Pokémon fields.
//
// Rules run in a fixed order and stop at the first failure:
// name, type shape, type members, base stats, image.

use serde::Deserialize;
use serde_json::Value;

use crate::modules::pokemons::core::pokemon::{BaseStats, Pokemon, PokemonName};
use crate::modules::pokemons::core::pokemon_type::PokemonType;

/// Loosely typed record fields as they arrive over the wire.
/// A JSON `null` deserializes to `None`, same as an absent key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PokemonDraft {
    pub name: Option<Value>,
    #[serde(rename = "type")]
    pub types: Option<Value>,
    pub base: Option<Value>,
    pub image: Option<Value>,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        r#"invalid "name": provide the "english", "japanese", "chinese" and "french" keys as strings"#
    )]
    InvalidName,

    #[error(r#"invalid "type": provide an array of strings naming the types"#)]
    TypeNotArray,

    #[error(r#"type "{0}" does not exist, accepted types are: {types}"#, types = PokemonType::accepted_names())]
    UnknownType(String),

    #[error(
        r#"invalid "base": provide numeric values for the "HP", "Attack", "Defense" and "Speed" keys"#
    )]
    InvalidBase,

    #[error(r#"invalid "image": provide the image path as a string"#)]
    InvalidImage,
}

/// Validates a brand new record.
pub fn validate(id: u32, draft: &PokemonDraft) -> Result<Pokemon, ValidationError> {
    build(id, draft, None)
}

/// Validates `patch` merged over `existing`; absent fields keep their current value.
pub fn validate_merged(existing: &Pokemon, patch: &PokemonDraft) -> Result<Pokemon, ValidationError> {
    build(existing.id, patch, Some(existing))
}

fn build(
    id: u32,
    draft: &PokemonDraft,
    fallback: Option<&Pokemon>,
) -> Result<Pokemon, ValidationError> {
    let name = resolve(
        draft.name.as_ref(),
        fallback.map(|p| &p.name),
        check_name,
        ValidationError::InvalidName,
    )?;
    let types = resolve(
        draft.types.as_ref(),
        fallback.map(|p| &p.types),
        check_types,
        ValidationError::TypeNotArray,
    )?;
    let base = resolve(
        draft.base.as_ref(),
        fallback.map(|p| &p.base),
        check_base,
        ValidationError::InvalidBase,
    )?;
    let image = resolve(
        draft.image.as_ref(),
        fallback.map(|p| &p.image),
        check_image,
        ValidationError::InvalidImage,
    )?;
    Ok(Pokemon {
        id,
        name,
        types,
        base,
        image,
    })
}

fn resolve<T: Clone>(
    supplied: Option<&Value>,
    fallback: Option<&T>,
    check: fn(&Value) -> Result<T, ValidationError>,
    missing: ValidationError,
) -> Result<T, ValidationError> {
    match (supplied, fallback) {
        (Some(value), _) => check(value),
        (None, Some(current)) => Ok(current.clone()),
        (None, None) => Err(missing),
    }
}

fn check_name(value: &Value) -> Result<PokemonName, ValidationError> {
    PokemonName::deserialize(value).map_err(|_| ValidationError::InvalidName)
}

fn check_types(value: &Value) -> Result<Vec<PokemonType>, ValidationError> {
    let Value::Array(entries) = value else {
        return Err(ValidationError::TypeNotArray);
    };
    entries
        .iter()
        .map(|entry| {
            entry
                .as_str()
                .and_then(PokemonType::parse)
                .ok_or_else(|| ValidationError::UnknownType(describe(entry)))
        })
        .collect()
}

fn check_base(value: &Value) -> Result<BaseStats, ValidationError> {
    BaseStats::deserialize(value).map_err(|_| ValidationError::InvalidBase)
}

fn check_image(value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(image) => Ok(image.clone()),
        _ => Err(ValidationError::InvalidImage),
    }
}

fn describe(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
