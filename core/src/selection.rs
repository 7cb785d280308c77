use smallvec::SmallVec;

use crate::*;

/// How many cards can be face up and unresolved at once.
pub const SELECTION_CAPACITY: usize = 2;

/// FIFO of the open, not yet resolved cells of the current turn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionBuffer {
    picks: SmallVec<[CellIndex; SELECTION_CAPACITY]>,
}

impl SelectionBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == SELECTION_CAPACITY
    }

    pub fn push(&mut self, index: CellIndex) -> Result<()> {
        if self.is_full() {
            return Err(GameError::SelectionFull);
        }
        if self.picks.contains(&index) {
            return Err(GameError::AlreadyRevealed(index));
        }
        self.picks.push(index);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<CellIndex> {
        if self.picks.is_empty() {
            None
        } else {
            Some(self.picks.remove(0))
        }
    }

    /// Drains both open cells, oldest first, once the buffer is full.
    pub fn take_pair(&mut self) -> Option<(CellIndex, CellIndex)> {
        if !self.is_full() {
            return None;
        }
        let pair = (self.pop()?, self.pop()?);
        self.clear();
        Some(pair)
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }
}
