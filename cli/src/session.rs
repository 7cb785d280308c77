use std::io::{BufRead, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use memmatch_core::*;

use crate::*;

/// Why a session stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player entered 0 during a level.
    Quit,
    /// The player won a level and did not ask for the next one.
    Declined,
    /// The largest level was won.
    Completed,
    /// The answer to the next-level prompt was not an integer.
    InvalidContinue,
}

impl SessionEnd {
    /// Process status for this ending, non-zero only for an unparsable next-level answer.
    pub const fn exit_status(self) -> u8 {
        match self {
            Self::Quit | Self::Declined | Self::Completed => 0,
            Self::InvalidContinue => 1,
        }
    }

    pub fn exit_code(self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum LevelEnd {
    Won,
    Quit,
}

/// Answer to the next-level prompt; anything unparsable is `Invalid`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum NextLevel {
    Continue(Level),
    Stop,
    Invalid,
}

/// Plays levels back to back over a console, starting at `level` and growing after each win.
pub struct Session<R, W, G> {
    input: TokenReader<R>,
    output: W,
    generator: G,
    level: Level,
}

impl<R: BufRead, W: Write, G: DeckGenerator> Session<R, W, G> {
    pub fn new(input: R, output: W, generator: G, level: Level) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            generator,
            level,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn run(&mut self) -> Result<SessionEnd> {
        let end = self.run_levels()?;
        log::info!("Session ended at level {}: {:?}", self.level, end);
        Ok(end)
    }

    fn run_levels(&mut self) -> Result<SessionEnd> {
        loop {
            let mut engine = self
                .level
                .start(&mut self.generator)
                .with_context(|| format!("Could not deal level {}", self.level))?;

            if self.play_level(&mut engine)? == LevelEnd::Quit {
                return Ok(SessionEnd::Quit);
            }

            if self.level.is_last() {
                writeln!(
                    self.output,
                    "You've cleared the largest board. Thanks for playing!"
                )?;
                return Ok(SessionEnd::Completed);
            }

            match self.ask_next_level()? {
                NextLevel::Continue(next) => {
                    writeln!(self.output, "Starting Level {next}")?;
                    self.level = next;
                }
                NextLevel::Stop => return Ok(SessionEnd::Declined),
                NextLevel::Invalid => return Ok(SessionEnd::InvalidContinue),
            }
        }
    }

    fn play_level(&mut self, engine: &mut TurnEngine) -> Result<LevelEnd> {
        let total_cells = engine.board().total_cells();

        loop {
            render_board(&mut self.output, engine.board(), engine.score(), &[])?;
            write!(
                self.output,
                "Enter the index of the card (1-{total_cells}), or enter 0 to quit: "
            )?;
            self.output.flush()?;

            let input = match self.input.next_int().context("Could not read selection")? {
                IntInput::Value(input) => input,
                IntInput::Malformed => {
                    writeln!(
                        self.output,
                        "Invalid input. Please enter a valid index (1-{total_cells}) or 0 to quit."
                    )?;
                    continue;
                }
                IntInput::Eof => {
                    log::warn!("Input closed, quitting level {}", self.level);
                    0
                }
            };

            let score_before = engine.score();
            let outcome = match engine.select(input) {
                Ok(outcome) => outcome,
                Err(GameError::InvalidIndex(_) | GameError::AlreadyRevealed(_)) => {
                    writeln!(self.output, "Invalid index. Try again.")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            if outcome.is_quit() {
                writeln!(
                    self.output,
                    "Quitting the game. Your final score is {}.",
                    outcome.score
                )?;
                return Ok(LevelEnd::Quit);
            }

            let face_up = outcome
                .resolution
                .map(|resolution| resolution.cells().to_vec())
                .unwrap_or_default();
            render_board(&mut self.output, engine.board(), score_before, &face_up)?;

            if let Some(Resolution::Matched { symbol, .. }) = outcome.resolution {
                writeln!(self.output, "Matched {symbol}! +{MATCH_POINTS} points")?;
            }

            if outcome.is_won() {
                writeln!(
                    self.output,
                    "Congratulations! You've matched all the cards. Your final score is {}.",
                    outcome.score
                )?;
                writeln!(self.output, "Thanks for playing!")?;
                return Ok(LevelEnd::Won);
            }
        }
    }

    fn ask_next_level(&mut self) -> Result<NextLevel> {
        write!(
            self.output,
            "Do you want to try the next level? (1 for Yes, 0 for No): "
        )?;
        self.output.flush()?;

        Ok(match self.input.next_int().context("Could not read answer")? {
            IntInput::Value(1) => match self.level.next() {
                Some(next) => NextLevel::Continue(next),
                None => NextLevel::Stop,
            },
            IntInput::Value(answer) => {
                log::debug!("Declined next level with {}", answer);
                NextLevel::Stop
            }
            IntInput::Malformed | IntInput::Eof => {
                writeln!(self.output, "Invalid input. Exiting.")?;
                NextLevel::Invalid
            }
        })
    }
}
