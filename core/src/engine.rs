use crate::*;

/// Points added for each matched pair.
pub const MATCH_POINTS: Score = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EngineState {
    AwaitingFirstPick,
    AwaitingSecondPick,
    LevelWon,
    LevelQuit,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::LevelWon | Self::LevelQuit)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::AwaitingFirstPick
    }
}

/// How a pair of open cards was settled.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Both cards stay face up.
    Matched {
        first: CellIndex,
        second: CellIndex,
        symbol: char,
    },
    /// Both cards were turned back down.
    Mismatched { first: CellIndex, second: CellIndex },
}

impl Resolution {
    pub const fn cells(self) -> [CellIndex; 2] {
        match self {
            Self::Matched { first, second, .. } | Self::Mismatched { first, second } => {
                [first, second]
            }
        }
    }
}

/// Result of one accepted player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Cell revealed by this input, `None` when the player quit.
    pub picked: Option<CellIndex>,
    pub resolution: Option<Resolution>,
    pub state: EngineState,
    pub score: Score,
}

impl TurnOutcome {
    pub const fn is_won(&self) -> bool {
        matches!(self.state, EngineState::LevelWon)
    }

    pub const fn is_quit(&self) -> bool {
        matches!(self.state, EngineState::LevelQuit)
    }
}

/// Plays one level: takes picks, resolves pairs, and keeps the score.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnEngine {
    board: Board,
    selection: SelectionBuffer,
    score: Score,
    state: EngineState,
}

impl TurnEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            selection: SelectionBuffer::new(),
            score: 0,
            state: Default::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Applies one player input: `0` quits, `1..=total_cells` picks a card.
    ///
    /// Rejected inputs leave the board, the open cards and the score untouched.
    pub fn select(&mut self, input: i64) -> Result<TurnOutcome> {
        self.check_not_finished()?;

        if input == 0 {
            return self.quit();
        }

        let index = self.validate_pick(input)?;
        self.selection.push(index)?;
        self.board.reveal(index)?;
        log::debug!("Picked cell {}", index);

        let resolution = self
            .selection
            .take_pair()
            .map(|(first, second)| self.resolve(first, second))
            .transpose()?;

        self.state = if self.board.is_fully_revealed() {
            log::debug!("Level won with score {}", self.score);
            EngineState::LevelWon
        } else if self.selection.is_empty() {
            EngineState::AwaitingFirstPick
        } else {
            EngineState::AwaitingSecondPick
        };

        Ok(TurnOutcome {
            picked: Some(index),
            resolution,
            state: self.state,
            score: self.score,
        })
    }

    pub fn quit(&mut self) -> Result<TurnOutcome> {
        self.check_not_finished()?;
        log::debug!("Level quit with score {}", self.score);
        self.state = EngineState::LevelQuit;
        Ok(TurnOutcome {
            picked: None,
            resolution: None,
            state: self.state,
            score: self.score,
        })
    }

    fn validate_pick(&self, input: i64) -> Result<CellIndex> {
        let index = input
            .checked_sub(1)
            .and_then(|index| CellIndex::try_from(index).ok())
            .filter(|&index| index < self.board.total_cells())
            .ok_or(GameError::InvalidIndex(input))?;

        if self.board.cell_at(index)?.revealed {
            Err(GameError::AlreadyRevealed(index))
        } else {
            Ok(index)
        }
    }

    fn resolve(&mut self, first: CellIndex, second: CellIndex) -> Result<Resolution> {
        let symbol = self.board.cell_at(first)?.symbol;
        if symbol == self.board.cell_at(second)?.symbol {
            self.score += MATCH_POINTS;
            log::debug!("Matched {} at {} and {}", symbol, first, second);
            Ok(Resolution::Matched {
                first,
                second,
                symbol,
            })
        } else {
            self.board.hide(first)?;
            self.board.hide(second)?;
            log::debug!(
                "No match at {} and {}, {} of {} cells face up",
                first,
                second,
                self.board.revealed_count(),
                self.board.total_cells()
            );
            Ok(Resolution::Mismatched { first, second })
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
