use crate::modules::pokemons::core::validate::PokemonDraft;

/// Partial update: any field left `None` keeps its stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePokemon {
    pub id: i64,
    pub patch: PokemonDraft,
}
