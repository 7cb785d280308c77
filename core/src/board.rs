use core::ops::Index;
use ndarray::Array2;

use crate::*;

/// Grid of cards for a single level.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    rows: Coord,
    cols: Coord,
    cells: Array2<Cell>,
}

impl Board {
    /// Creates a `rows` by `cols` board of blank, face-down cells.
    pub fn new(rows: Coord, cols: Coord) -> Self {
        Self {
            rows,
            cols,
            cells: Array2::default((rows, cols).to_nd_index()),
        }
    }

    /// Creates a board and deals `symbols` onto it in row-major order.
    pub fn with_symbols(rows: Coord, cols: Coord, symbols: &[char]) -> Result<Self> {
        let mut board = Self::new(rows, cols);
        board.populate(symbols)?;
        Ok(board)
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn cols(&self) -> Coord {
        self.cols
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Assigns `symbols` to the cells in sequence order.
    pub fn populate(&mut self, symbols: &[char]) -> Result<()> {
        if symbols.len() != usize::from(self.total_cells()) {
            return Err(GameError::DeckSizeMismatch {
                expected: self.total_cells(),
                actual: symbols.len(),
            });
        }

        for (cell, &symbol) in self.cells.iter_mut().zip(symbols) {
            cell.symbol = symbol;
        }
        Ok(())
    }

    pub fn coords_of(&self, index: CellIndex) -> Result<Coord2> {
        if index < self.total_cells() {
            Ok(split_index(index, self.cols))
        } else {
            Err(GameError::InvalidIndex(index.into()))
        }
    }

    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        let coords = self.coords_of(index)?;
        Ok(self[coords])
    }

    pub fn reveal(&mut self, index: CellIndex) -> Result<()> {
        let coords = self.coords_of(index)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.revealed {
            return Err(GameError::AlreadyRevealed(index));
        }
        cell.revealed = true;
        log::trace!("Revealed cell {} at {:?}", index, coords);
        Ok(())
    }

    pub fn hide(&mut self, index: CellIndex) -> Result<()> {
        let coords = self.coords_of(index)?;
        self.cells[coords.to_nd_index()].revealed = false;
        log::trace!("Hid cell {} at {:?}", index, coords);
        Ok(())
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.revealed)
    }

    pub(crate) fn revealed_count(&self) -> CellCount {
        // never exceeds total_cells, which already fits
        self.cells.iter().filter(|cell| cell.revealed).count() as CellCount
    }

    /// Cells grouped by row, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = Cell> + '_> + '_ {
        self.cells
            .rows()
            .into_iter()
            .map(|row| row.into_iter().copied())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
