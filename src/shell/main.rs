use anyhow::Context;
use std::sync::Arc;

use pokedex_api::modules::pokemons::pokedex::Pokedex;
use pokedex_api::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use pokedex_api::shell::{config::AppConfig, http, logging, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init();

    let config = AppConfig::from_env()?;

    let store = Arc::new(JsonFileSnapshotStore::new(&config.pokemons_file));
    let pokedex = Pokedex::load(store)
        .await
        .with_context(|| format!("cannot load {}", config.pokemons_file.display()))?;
    tracing::info!(
        count = pokedex.count().await,
        file = %config.pokemons_file.display(),
        "Pokédex loaded"
    );

    let app = http::app(AppState::new(pokedex), &config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("cannot bind {addr}"))?;
    tracing::info!("Pokémon API listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
