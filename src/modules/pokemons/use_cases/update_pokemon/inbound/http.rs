use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection, rejection::PathRejection},
    response::IntoResponse,
};

use crate::modules::pokemons::adapters::inbound::http::{pokemon_id, unprocessable};
use crate::modules::pokemons::core::validate::PokemonDraft;
use crate::modules::pokemons::use_cases::update_pokemon::command::UpdatePokemon;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<PokemonDraft>, JsonRejection>,
) -> impl IntoResponse {
    let id = match pokemon_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    match state.pokedex.update(UpdatePokemon { id, patch }).await {
        Ok(pokemon) => Json(pokemon).into_response(),
        Err(e) => e.into_response(),
    }
}
