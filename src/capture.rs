//! Capture Module
//!
//! Decides whether a thrown Pokeball catches a creature, and keeps the
//! caught ones.

use std::collections::BTreeMap;

use rand::Rng;

use crate::api::Pokemon;

/// Lowest capture chance, in percent
pub const MIN_CAPTURE_RATE: f64 = 5.0;

/// Chance used when the formula overshoots 100%
pub const CAPPED_CAPTURE_RATE: f64 = 95.0;

// == Capture Rate ==
/// Chance in percent of catching `pokemon`: `100 - base_experience / 2`.
///
/// Never below 5%. A result above 100% (only possible with a negative base
/// experience) becomes 95%. Missing base experience counts as 0.
pub fn capture_rate(pokemon: &Pokemon) -> f64 {
    let experience = pokemon.base_experience.unwrap_or(0) as f64;
    let rate = 100.0 - experience / 2.0;

    if rate < MIN_CAPTURE_RATE {
        MIN_CAPTURE_RATE
    } else if rate > 100.0 {
        CAPPED_CAPTURE_RATE
    } else {
        rate
    }
}

// == Attempt Capture ==
/// Rolls a number in `[0, 100)` and succeeds if it does not exceed the rate.
pub fn attempt_capture<R: Rng + ?Sized>(rng: &mut R, pokemon: &Pokemon) -> bool {
    let roll = rng.gen::<f64>() * 100.0;
    roll <= capture_rate(pokemon)
}

// == Pokedex ==
/// Caught creatures, keyed by the name they were caught under.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a capture, replacing any earlier one of the same name.
    pub fn insert(&mut self, name: impl Into<String>, pokemon: Pokemon) {
        self.caught.insert(name.into(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Caught names in alphabetical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}
