// Shared test fixture for the CreatePokemon command.
// Seeded from json/create_pokemon.json, the same body a client would POST.

use serde_json::{Map, Value};

use crate::modules::pokemons::core::validate::PokemonDraft;
use crate::modules::pokemons::use_cases::create_pokemon::command::CreatePokemon;

const CREATE_POKEMON_JSON: &str = include_str!("json/create_pokemon.json");

pub struct CreatePokemonBuilder {
    inner: PokemonDraft,
}

impl Default for CreatePokemonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl CreatePokemonBuilder {
    pub fn new() -> Self {
        Self {
            inner: serde_json::from_str(CREATE_POKEMON_JSON).unwrap(),
        }
    }

    pub fn name(mut self, v: Value) -> Self {
        self.inner.name = Some(v);
        self
    }

    pub fn types(mut self, v: Value) -> Self {
        self.inner.types = Some(v);
        self
    }

    pub fn base(mut self, v: Value) -> Self {
        self.inner.base = Some(v);
        self
    }

    pub fn image(mut self, v: Value) -> Self {
        self.inner.image = Some(v);
        self
    }

    pub fn without_name_key(mut self, key: &str) -> Self {
        if let Some(Value::Object(name)) = self.inner.name.as_mut() {
            name.remove(key);
        }
        self
    }

    pub fn without_image(mut self) -> Self {
        self.inner.image = None;
        self
    }

    /// Request body carrying only the fields that are set.
    pub fn to_json(&self) -> Value {
        let mut body = Map::new();
        let fields = [
            ("name", &self.inner.name),
            ("type", &self.inner.types),
            ("base", &self.inner.base),
            ("image", &self.inner.image),
        ];
        for (key, value) in fields {
            if let Some(v) = value {
                body.insert(key.to_string(), v.clone());
            }
        }
        Value::Object(body)
    }

    pub fn build(self) -> CreatePokemon {
        CreatePokemon { draft: self.inner }
    }
}

#[cfg(test)]
mod create_pokemon_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = CreatePokemonBuilder::default().build();
        assert_eq!(built.draft.image, Some(json!("bulbasaur.png")));
        assert_eq!(built.draft.types, Some(json!(["grass", "poison"])));
        assert_eq!(built.draft.name.unwrap()["french"], json!("Bulbizarre"));
    }

    #[rstest]
    fn setters_override_fields_and_to_json_skips_unset_ones() {
        let builder = CreatePokemonBuilder::new()
            .name(json!({"english": "Pikachu"}))
            .types(json!(["electric"]))
            .base(json!({"HP": 35}))
            .image(json!("pikachu.png"))
            .without_image();
        let body = builder.to_json();
        assert_eq!(body["type"], json!(["electric"]));
        assert_eq!(body["base"], json!({"HP": 35}));
        assert!(body.get("image").is_none());
    }
}
