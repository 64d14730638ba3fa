use crate::modules::pokemons::core::pokemon::Pokemon;
use crate::modules::pokemons::core::validate::ValidationError;

pub enum Decision {
    Accepted { pokemon: Pokemon },
    Rejected { reason: ValidationError },
}
