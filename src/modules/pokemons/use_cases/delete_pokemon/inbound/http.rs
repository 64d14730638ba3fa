use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::modules::pokemons::adapters::inbound::http::{MessageBody, pokemon_id};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> impl IntoResponse {
    let id = match pokemon_id(path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.pokedex.delete(id).await {
        Ok(name) => Json(MessageBody {
            message: format!(
                r#"Pokémon "{}" has been deleted"#,
                name.unwrap_or_default()
            ),
        })
        .into_response(),
        Err(e) => e.into_response(),
    }
}
