use rand::prelude::*;

use super::*;

/// Generation strategy that deals the initial deck and applies a Fisher–Yates shuffle.
///
/// The random source lives as long as the generator, so one generator seeded at startup serves
/// every level of a session.
#[derive(Clone, Debug)]
pub struct ShuffledDeckGenerator<R = SmallRng> {
    rng: R,
}

impl ShuffledDeckGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ShuffledDeckGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> DeckGenerator for ShuffledDeckGenerator<R> {
    fn generate(&mut self, size: CellCount) -> Result<Vec<char>> {
        let mut deck = initial_deck(size)?;
        shuffle(&mut deck, &mut self.rng);
        log::debug!("Dealt {} cards", deck.len());
        Ok(deck)
    }
}

/// Uniform in-place permutation: walks from the last slot down to 1, swapping each with a slot
/// drawn from `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
        log::trace!("Swapped slots {} and {}", i, j);
    }
}
