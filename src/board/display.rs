use std::fmt;

use super::{Board, Color, Square};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for col in 0..self.size() {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for row in 0..self.size() {
            write!(f, "{:>2}", row)?;
            for col in 0..self.size() {
                let symbol = match self.get(Square::new(col, row)) {
                    None => '.',
                    Some(Color::Dark) => 'x',
                    Some(Color::Light) => 'o',
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a board from a literal grid, top row first: `.` is an empty cell,
/// `x` a dark disk, `o` a light disk. The side length is inferred and the
/// input must be square.
#[macro_export]
macro_rules! othello_position {
    ($($cell:tt)*) => {{
        let cells: Vec<char> = stringify!($($cell)*)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let size = (cells.len() as f64).sqrt() as usize;
        assert_eq!(
            size * size,
            cells.len(),
            "board literal must be square, got {} cells",
            cells.len()
        );
        let mut board = $crate::board::Board::new(size);
        for (i, &c) in cells.iter().enumerate() {
            let square = $crate::board::Square::new(i % size, i / size);
            match c {
                '.' => (),
                'x' => board.put(square, $crate::board::Color::Dark),
                'o' => board.put(square, $crate::board::Color::Light),
                _ => panic!("invalid character {:?} in board literal", c),
            }
        }
        board
    }};
}

#[cfg(test)]
mod tests {
    use crate::othello_position;

    #[test]
    fn test_display_shows_disks_and_indices() {
        let board = othello_position! {
            ....
            .ox.
            .xxx
            ....
        };
        let rendered = board.to_string();
        assert!(rendered.contains("0 1 2 3"));
        assert!(rendered.contains(" 1 . o x ."));
        assert!(rendered.contains(" 2 . x x x"));
    }
}
