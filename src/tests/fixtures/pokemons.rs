use serde_json::json;
use std::collections::BTreeMap;

use crate::modules::pokemons::core::pokemon::{BaseStats, Pokemon, PokemonName};
use crate::modules::pokemons::core::pokemon_type::PokemonType;

/// The record the create fixture produces, under any id.
pub fn make_bulbasaur(id: u32) -> Pokemon {
    Pokemon {
        id,
        name: PokemonName {
            english: "Bulbasaur".into(),
            japanese: "フシギダネ".into(),
            chinese: "妙蛙种子".into(),
            french: "Bulbizarre".into(),
            extra: BTreeMap::new(),
        },
        types: vec![PokemonType::Grass, PokemonType::Poison],
        base: BaseStats {
            hp: 45.into(),
            attack: 49.into(),
            defense: 49.into(),
            speed: 45.into(),
            extra: BTreeMap::from([
                ("Sp. Attack".to_string(), json!(65)),
                ("Sp. Defense".to_string(), json!(65)),
            ]),
        },
        image: "bulbasaur.png".into(),
    }
}

pub fn make_three_slots() -> Vec<Option<Pokemon>> {
    (1..=3).map(|id| Some(make_bulbasaur(id))).collect()
}
