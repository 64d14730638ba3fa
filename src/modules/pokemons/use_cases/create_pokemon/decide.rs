use crate::modules::pokemons::core::{
    collection::PokemonCollection, decision::Decision, validate::validate,
};
use crate::modules::pokemons::use_cases::create_pokemon::command::CreatePokemon;

pub fn decide_create(collection: &PokemonCollection, command: &CreatePokemon) -> Decision {
    match validate(collection.next_id(), &command.draft) {
        Ok(pokemon) => Decision::Accepted { pokemon },
        Err(reason) => Decision::Rejected { reason },
    }
}
