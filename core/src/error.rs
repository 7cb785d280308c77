use thiserror::Error;

use crate::{CellCount, CellIndex};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid cell index {0}")]
    InvalidIndex(i64),
    #[error("Cell {0} is already revealed")]
    AlreadyRevealed(CellIndex),
    #[error("Two cards are already open")]
    SelectionFull,
    #[error("Deck holds {actual} symbols but the board has {expected} cells")]
    DeckSizeMismatch { expected: CellCount, actual: usize },
    #[error("Not enough symbols for {requested} cells, at most {capacity} fit")]
    AlphabetExhausted {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Level {0} is outside the playable range")]
    InvalidLevel(u8),
    #[error("Level already ended, no new picks are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
