use axum::{Router, routing::get};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::modules::pokemons::use_cases::create_pokemon::inbound::http as create_http;
use crate::modules::pokemons::use_cases::delete_pokemon::inbound::http as delete_http;
use crate::modules::pokemons::use_cases::get_pokemon::inbound::http as get_http;
use crate::modules::pokemons::use_cases::list_pokemons::inbound::http as list_http;
use crate::modules::pokemons::use_cases::update_pokemon::inbound::http as update_http;
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;

pub const WELCOME: &str = "Welcome to the Pokémon API";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/api/pokemons",
            get(list_http::handle).post(create_http::handle),
        )
        .route(
            "/api/pokemons/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .with_state(state)
}

/// The API plus static assets, the schema document, CORS and request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    router(state)
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .route_service("/api-docs", ServeFile::new(&config.api_docs_file))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn welcome() -> &'static str {
    WELCOME
}
