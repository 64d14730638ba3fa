// Positional collection of Pokémon.
//
// Slot `id - 1` holds the record with that id. Deleting clears the slot and
// leaves a hole instead of shifting later records down, so `len() + 1` is
// always a fresh id. Holes serialize as `null`.

use crate::modules::pokemons::core::pokemon::Pokemon;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonCollection {
    slots: Vec<Option<Pokemon>>,
}

impl PokemonCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: Vec<Option<Pokemon>>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[Option<Pokemon>] {
        &self.slots
    }

    /// Number of slots, holes included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn next_id(&self) -> u32 {
        self.slots.len() as u32 + 1
    }

    /// `true` while `id` does not point past the last slot.
    pub fn covers(&self, id: i64) -> bool {
        id <= self.slots.len() as i64
    }

    /// Scans by `id` field rather than trusting slot alignment.
    pub fn find(&self, id: i64) -> Option<&Pokemon> {
        self.position(id).and_then(|idx| self.slots[idx].as_ref())
    }

    pub fn position(&self, id: i64) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| matches!(slot, Some(p) if i64::from(p.id) == id))
    }

    pub fn push(&mut self, pokemon: Pokemon) {
        self.slots.push(Some(pokemon));
    }

    pub fn pop(&mut self) -> Option<Pokemon> {
        self.slots.pop().flatten()
    }

    /// Puts `pokemon` at `idx`, returning what was there.
    pub fn replace(&mut self, idx: usize, pokemon: Option<Pokemon>) -> Option<Pokemon> {
        std::mem::replace(&mut self.slots[idx], pokemon)
    }

    /// Clears slot `id - 1`. Out of range ids and existing holes yield `None`.
    pub fn take(&mut self, id: i64) -> Option<Pokemon> {
        let idx = usize::try_from(id.checked_sub(1)?).ok()?;
        self.slots.get_mut(idx)?.take()
    }

    pub fn count_present(&self) -> usize {
        self.slots.iter().flatten().count()
    }
}
