use axum::{
    Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};

use crate::modules::pokemons::adapters::inbound::http::{MessageBody, unprocessable};
use crate::modules::pokemons::core::validate::PokemonDraft;
use crate::modules::pokemons::use_cases::create_pokemon::command::CreatePokemon;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PokemonDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return unprocessable(rejection),
    };

    match state.pokedex.create(CreatePokemon { draft }).await {
        Ok(pokemon) => Json(MessageBody {
            message: format!("Pokémon #{} successfully added", pokemon.id),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
