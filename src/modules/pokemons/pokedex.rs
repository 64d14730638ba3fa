// The Pokédex owns the in-memory collection and its snapshot store.
//
// Every operation holds the collection lock for its whole read, modify and
// save cycle, so two writes never interleave. A failed save rolls the
// in-memory change back, keeping memory and storage identical.

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::pokemons::core::collection::PokemonCollection;
use crate::modules::pokemons::core::decision::Decision;
use crate::modules::pokemons::core::pokemon::Pokemon;
use crate::modules::pokemons::core::validate::ValidationError;
use crate::modules::pokemons::use_cases::create_pokemon::command::CreatePokemon;
use crate::modules::pokemons::use_cases::create_pokemon::decide::decide_create;
use crate::modules::pokemons::use_cases::update_pokemon::command::UpdatePokemon;
use crate::modules::pokemons::use_cases::update_pokemon::decide::decide_update;
use crate::shared::infrastructure::snapshot_store::{SnapshotStore, SnapshotStoreError};

#[derive(Debug, Error)]
pub enum PokedexError {
    #[error("Pokémon not found")]
    NotFound { id: i64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("storage failure: {0}")]
    Storage(#[from] SnapshotStoreError),
}

pub struct Pokedex {
    collection: Mutex<PokemonCollection>,
    store: Arc<dyn SnapshotStore<Pokemon>>,
}

impl Pokedex {
    pub fn new(store: Arc<dyn SnapshotStore<Pokemon>>, collection: PokemonCollection) -> Self {
        Self {
            collection: Mutex::new(collection),
            store,
        }
    }

    /// Builds a Pokédex from whatever the store currently holds.
    pub async fn load(store: Arc<dyn SnapshotStore<Pokemon>>) -> Result<Self, SnapshotStoreError> {
        let slots = store.load().await?;
        Ok(Self::new(store, PokemonCollection::from_slots(slots)))
    }

    /// Every slot, holes included.
    pub async fn list(&self) -> Vec<Option<Pokemon>> {
        self.collection.lock().await.slots().to_vec()
    }

    pub async fn count(&self) -> usize {
        self.collection.lock().await.count_present()
    }

    pub async fn get(&self, id: i64) -> Result<Pokemon, PokedexError> {
        self.collection
            .lock()
            .await
            .find(id)
            .cloned()
            .ok_or(PokedexError::NotFound { id })
    }

    pub async fn create(&self, command: CreatePokemon) -> Result<Pokemon, PokedexError> {
        let mut collection = self.collection.lock().await;
        let pokemon = match decide_create(&collection, &command) {
            Decision::Accepted { pokemon } => pokemon,
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, "rejected Pokémon creation");
                return Err(reason.into());
            }
        };

        collection.push(pokemon.clone());
        if let Err(e) = self.store.save(collection.slots()).await {
            collection.pop();
            tracing::error!(error = %e, id = pokemon.id, "failed to persist created Pokémon");
            return Err(e.into());
        }
        tracing::info!(id = pokemon.id, name = %pokemon.name.english, "Pokémon created");
        Ok(pokemon)
    }

    pub async fn update(&self, command: UpdatePokemon) -> Result<Pokemon, PokedexError> {
        let id = command.id;
        let mut collection = self.collection.lock().await;
        if !collection.covers(id) {
            return Err(PokedexError::NotFound { id });
        }
        let Some(idx) = collection.position(id) else {
            return Err(PokedexError::NotFound { id });
        };
        let Some(existing) = collection.slots()[idx].as_ref() else {
            return Err(PokedexError::NotFound { id });
        };

        let pokemon = match decide_update(existing, &command) {
            Decision::Accepted { pokemon } => pokemon,
            Decision::Rejected { reason } => {
                tracing::warn!(%reason, id, "rejected Pokémon update");
                return Err(reason.into());
            }
        };

        let previous = collection.replace(idx, Some(pokemon.clone()));
        if let Err(e) = self.store.save(collection.slots()).await {
            collection.replace(idx, previous);
            tracing::error!(error = %e, id, "failed to persist updated Pokémon");
            return Err(e.into());
        }
        tracing::info!(id, "Pokémon updated");
        Ok(pokemon)
    }

    /// Clears slot `id - 1` and returns the French name of what was there.
    /// An empty slot or an out of range id is not an error; nothing is written then.
    pub async fn delete(&self, id: i64) -> Result<Option<String>, PokedexError> {
        let mut collection = self.collection.lock().await;
        let Some(removed) = collection.take(id) else {
            tracing::debug!(id, "nothing to delete");
            return Ok(None);
        };

        // take() only succeeds for 1..=len
        let idx = (id - 1) as usize;
        if let Err(e) = self.store.save(collection.slots()).await {
            let french = removed.name.french.clone();
            collection.replace(idx, Some(removed));
            tracing::error!(error = %e, id, name = %french, "failed to persist deleted Pokémon");
            return Err(e.into());
        }
        tracing::info!(id, name = %removed.name.french, "Pokémon deleted");
        Ok(Some(removed.name.french))
    }
}
