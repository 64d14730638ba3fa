use crate::modules::pokemons::pokedex::Pokedex;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pokedex: Arc<Pokedex>,
}

impl AppState {
    pub fn new(pokedex: Pokedex) -> Self {
        Self {
            pokedex: Arc::new(pokedex),
        }
    }
}
