use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::modules::pokemons::core::pokemon::Pokemon;
use crate::modules::pokemons::core::pokemon_type::PokemonType;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ListPokemonsResponse {
    pub types: &'static [PokemonType],
    pub pokemons: Vec<Option<Pokemon>>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    Json(ListPokemonsResponse {
        types: &PokemonType::ALL,
        pokemons: state.pokedex.list().await,
    })
}
