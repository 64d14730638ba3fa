use http_body_util::BodyExt;
use std::sync::Arc;

use crate::modules::pokemons::core::collection::PokemonCollection;
use crate::modules::pokemons::core::pokemon::Pokemon;
use crate::modules::pokemons::pokedex::Pokedex;
use crate::shared::infrastructure::snapshot_store::in_memory::InMemorySnapshotStore;
use crate::shell::state::AppState;

pub type TestState = (Arc<InMemorySnapshotStore<Pokemon>>, AppState);

/// State whose snapshot store already holds `slots`.
pub fn make_test_state(slots: Vec<Option<Pokemon>>) -> TestState {
    let store = Arc::new(InMemorySnapshotStore::with_slots(slots.clone()));
    let pokedex = Pokedex::new(store.clone(), PokemonCollection::from_slots(slots));
    (store, AppState::new(pokedex))
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
