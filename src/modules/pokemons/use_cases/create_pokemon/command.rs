use crate::modules::pokemons::core::validate::PokemonDraft;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePokemon {
    pub draft: PokemonDraft,
}
