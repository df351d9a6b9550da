pub mod color;
pub mod display;
pub mod error;
mod parse;
pub mod square;

pub use color::Color;
pub use square::Square;

/// A square Othello board.
///
/// Boards are value types: cells are stored as a flat row-major vector, so
/// two boards with identical contents are equal and hash identically, which
/// makes them usable as memoization keys. The search layer never mutates a
/// board in place; applying a move produces a new board.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Creates a board with the four standard center disks placed.
    pub fn starting_position(size: usize) -> Self {
        assert!(
            size >= 4 && size % 2 == 0,
            "starting position requires an even board size of at least 4"
        );
        let mut board = Self::new(size);
        let m = size / 2;
        board.put(Square::new(m - 1, m - 1), Color::Light);
        board.put(Square::new(m, m - 1), Color::Dark);
        board.put(Square::new(m - 1, m), Color::Dark);
        board.put(Square::new(m, m), Color::Light);
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    pub fn get(&self, square: Square) -> Option<Color> {
        self.cells[self.index(square)]
    }

    pub fn is_empty_at(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Places a disk, overwriting whatever occupies the square. Used by the
    /// rules provider while constructing successor boards and by tests.
    pub fn put(&mut self, square: Square, color: Color) {
        let index = self.index(square);
        self.cells[index] = Some(color);
    }

    /// Returns `(dark, light)` disk counts.
    pub fn disk_count(&self) -> (u32, u32) {
        let mut dark = 0;
        let mut light = 0;
        for cell in self.cells.iter() {
            match cell {
                Some(Color::Dark) => dark += 1,
                Some(Color::Light) => light += 1,
                None => (),
            }
        }
        (dark, light)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    fn index(&self, square: Square) -> usize {
        debug_assert!(square.col < self.size && square.row < self.size);
        square.row * self.size + square.col
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    #[test]
    fn test_disk_and_empty_counts() {
        let board = othello_position! {
            ....
            .ox.
            .xxx
            ....
        };
        assert_eq!(board.disk_count(), (4, 1));
        assert_eq!(board.empty_count(), 11);
        assert_eq!(board.total_cells(), 16);
    }

    #[test]
    fn test_starting_position_8x8() {
        let board = Board::starting_position(8);
        assert_eq!(board.get(Square::new(3, 3)), Some(Color::Light));
        assert_eq!(board.get(Square::new(4, 3)), Some(Color::Dark));
        assert_eq!(board.get(Square::new(3, 4)), Some(Color::Dark));
        assert_eq!(board.get(Square::new(4, 4)), Some(Color::Light));
        assert_eq!(board.disk_count(), (2, 2));
    }

    #[test]
    fn test_boards_with_equal_contents_are_equal() {
        let a = Board::starting_position(6);
        let b = Board::starting_position(6);
        assert_eq!(a, b);
        assert_ne!(a, Board::new(6));
    }
}
