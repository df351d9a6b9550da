use std::fmt;

/// A board coordinate, which doubles as a move.
///
/// The column comes first. This ordering is part of the external contract
/// (moves are reported as `(column, row)` pairs) and is deliberately the
/// transpose of the board's row-major storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Square {
    pub col: usize,
    pub row: usize,
}

impl Square {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
