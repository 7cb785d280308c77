/// Symbol stored in a cell before the deck is dealt.
pub const BLANK_SYMBOL: char = ' ';

/// One card on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub revealed: bool,
}

impl Cell {
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            revealed: false,
        }
    }

    /// Symbol the player can currently see, `None` while face down.
    pub const fn visible_symbol(self) -> Option<char> {
        if self.revealed {
            Some(self.symbol)
        } else {
            None
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(BLANK_SYMBOL)
    }
}
