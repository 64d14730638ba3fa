use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

use crate::modules::pokemons::core::pokemon_type::PokemonType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: PokemonName,
    #[serde(rename = "type")]
    pub types: Vec<PokemonType>,
    pub base: BaseStats,
    pub image: String,
}

/// The four required languages plus any other the client sent, kept as is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonName {
    pub english: String,
    pub japanese: String,
    pub chinese: String,
    pub french: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The four checked stats plus whatever else the client sent, kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseStats {
    #[serde(rename = "HP")]
    pub hp: Number,
    #[serde(rename = "Attack")]
    pub attack: Number,
    #[serde(rename = "Defense")]
    pub defense: Number,
    #[serde(rename = "Speed")]
    pub speed: Number,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}
