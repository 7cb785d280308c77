#![no_std]

extern crate alloc;

use core::fmt;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use selection::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod selection;
mod types;

/// Board side length of a level; the board is always square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Level(Coord);

impl Level {
    pub const FIRST: Self = Self(2);

    /// Largest level whose board still fits in the symbol alphabet.
    pub const LAST: Self = Self(5);

    pub fn new(level: Coord) -> Result<Self> {
        if (Self::FIRST.0..=Self::LAST.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(GameError::InvalidLevel(level))
        }
    }

    pub const fn get(self) -> Coord {
        self.0
    }

    pub const fn total_cells(self) -> CellCount {
        mult(self.0, self.0)
    }

    /// The following level, `None` once the board would outgrow the alphabet.
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    pub const fn is_last(self) -> bool {
        self.0 >= Self::LAST.0
    }

    /// Deals a fresh board for this level and wraps it in an engine.
    pub fn start<G: DeckGenerator + ?Sized>(self, generator: &mut G) -> Result<TurnEngine> {
        let deck = generator.generate(self.total_cells())?;
        let board = Board::with_symbols(self.0, self.0, &deck)?;
        log::debug!("Started level {} with {} cells", self.0, board.total_cells());
        Ok(TurnEngine::new(board))
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
