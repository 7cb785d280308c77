use std::io::{self, Write};

use memmatch_core::{Board, CellIndex, Score, mult};

/// Drawn in place of a face-down card.
pub const HIDDEN_GLYPH: char = '*';

/// Writes the score header and the grid, one row per line.
///
/// Cells listed in `face_up` are drawn with their symbol even when hidden, which lets the player
/// see a mismatched pair before it is turned back down.
pub fn render_board<W: Write + ?Sized>(
    out: &mut W,
    board: &Board,
    score: Score,
    face_up: &[CellIndex],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Current Board (Score: {score}):")?;
    for (row, cells) in (0..board.rows()).zip(board.iter_rows()) {
        for (col, cell) in (0..board.cols()).zip(cells) {
            let index = mult(row, board.cols()) + CellIndex::from(col);
            let glyph = match cell.visible_symbol() {
                Some(symbol) => symbol,
                None if face_up.contains(&index) => cell.symbol,
                None => HIDDEN_GLYPH,
            };
            write!(out, "{glyph} ")?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}
