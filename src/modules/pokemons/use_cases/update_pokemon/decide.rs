use crate::modules::pokemons::core::{
    decision::Decision, pokemon::Pokemon, validate::validate_merged,
};
use crate::modules::pokemons::use_cases::update_pokemon::command::UpdatePokemon;

pub fn decide_update(existing: &Pokemon, command: &UpdatePokemon) -> Decision {
    match validate_merged(existing, &command.patch) {
        Ok(pokemon) => Decision::Accepted { pokemon },
        Err(reason) => Decision::Rejected { reason },
    }
}
