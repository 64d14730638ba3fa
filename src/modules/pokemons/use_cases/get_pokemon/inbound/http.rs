use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::pokemons::adapters::inbound::http::pokemon_id;
use crate::modules::pokemons::core::pokemon::Pokemon;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct GetPokemonResponse {
    pub pokemon: Pokemon,
}

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let id = match pokemon_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.pokedex.get(id).await {
        Ok(pokemon) => Json(GetPokemonResponse { pokemon }).into_response(),
        Err(e) => e.into_response(),
    }
}
