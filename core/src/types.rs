/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for cell counts and flat cell indices.
pub type CellCount = u16;

/// Zero-based, row-major position of a cell on the board.
pub type CellIndex = CellCount;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Points awarded for every matched pair.
pub type Score = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Splits a row-major index into `(row, col)` for a board `cols` wide.
pub const fn split_index(index: CellIndex, cols: Coord) -> Coord2 {
    let cols = cols as CellIndex;
    ((index / cols) as Coord, (index % cols) as Coord)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_index_is_row_major() {
        assert_eq!(split_index(0, 3), (0, 0));
        assert_eq!(split_index(2, 3), (0, 2));
        assert_eq!(split_index(3, 3), (1, 0));
        assert_eq!(split_index(8, 3), (2, 2));
    }

    #[test]
    fn mult_saturates() {
        assert_eq!(mult(4, 4), 16);
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
