use axum::{
    Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::pokemons::pokedex::PokedexError;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

impl IntoResponse for PokedexError {
    fn into_response(self) -> Response {
        let status = match &self {
            PokedexError::NotFound { .. } => StatusCode::NOT_FOUND,
            PokedexError::Validation(_) => StatusCode::BAD_REQUEST,
            PokedexError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Ids that are not integers can never match a record.
pub fn pokemon_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, Response> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            tracing::debug!(%rejection, "unparsable Pokémon id");
            Err((
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Pokémon not found".into(),
                }),
            )
                .into_response())
        }
    }
}

/// Bodies axum could not read as a draft, including a missing content type.
pub fn unprocessable(rejection: JsonRejection) -> Response {
    tracing::debug!(%rejection, "unreadable Pokémon body");
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: rejection.body_text(),
        }),
    )
        .into_response()
}
