use alloc::vec::Vec;

use crate::*;
pub use shuffled::*;

mod shuffled;

/// Symbols dealt in pairs, enough for boards up to 32 cells.
pub const ALPHABET: [char; 16] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P',
];

/// Unpaired symbol occupying the leftover slot of an odd-sized board.
pub const FILLER_SYMBOL: char = '$';

/// Largest deck that can be dealt: every pair plus the filler.
pub const MAX_DECK_SIZE: CellCount = 2 * ALPHABET.len() as CellCount + 1;

pub trait DeckGenerator {
    fn generate(&mut self, size: CellCount) -> Result<Vec<char>>;
}

/// Builds the unshuffled deck for `size` cells: pair `k` takes slots `2k` and `2k + 1`, and an odd
/// size ends with the filler.
pub fn initial_deck(size: CellCount) -> Result<Vec<char>> {
    if size > MAX_DECK_SIZE {
        log::warn!(
            "Cannot deal {} cells, the alphabet only covers {}",
            size,
            MAX_DECK_SIZE
        );
        return Err(GameError::AlphabetExhausted {
            requested: size,
            capacity: MAX_DECK_SIZE,
        });
    }

    let pairs = usize::from(size / 2);
    let mut deck: Vec<char> = ALPHABET[..pairs]
        .iter()
        .flat_map(|&symbol| [symbol, symbol])
        .collect();
    if size % 2 != 0 {
        deck.push(FILLER_SYMBOL);
    }
    Ok(deck)
}

/// Deals the deck in its initial order, handy for scripted games.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OrderedDeckGenerator;

impl DeckGenerator for OrderedDeckGenerator {
    fn generate(&mut self, size: CellCount) -> Result<Vec<char>> {
        initial_deck(size)
    }
}
