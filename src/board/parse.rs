//! Text notation for boards: rows of digits separated by `/`, top row first.
//! `0` is an empty cell, `1` a dark disk, `2` a light disk. The 4x4 board
//! `0000/0210/0111/0000` has a light disk at column 1, row 1.

use std::str::FromStr;

use super::error::BoardParseError;
use super::{Board, Color, Square};

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = input.split('/').collect();
        if input.is_empty() {
            return Err(BoardParseError::Empty);
        }

        let size = rows.len();
        let mut board = Board::new(size);
        for (row, row_str) in rows.iter().enumerate() {
            let cols = row_str.chars().count();
            if cols != size {
                return Err(BoardParseError::NotSquare {
                    rows: size,
                    row,
                    cols,
                });
            }
            for (col, c) in row_str.chars().enumerate() {
                match c {
                    '0' => (),
                    '1' => board.put(Square::new(col, row), Color::Dark),
                    '2' => board.put(Square::new(col, row), Color::Light),
                    _ => return Err(BoardParseError::InvalidCell(c)),
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Renders the board back into the `/`-separated digit notation.
    pub fn to_notation(&self) -> String {
        let mut notation = String::with_capacity(self.total_cells() + self.size);
        for row in 0..self.size {
            if row > 0 {
                notation.push('/');
            }
            for col in 0..self.size {
                notation.push(match self.get(Square::new(col, row)) {
                    None => '0',
                    Some(Color::Dark) => '1',
                    Some(Color::Light) => '2',
                });
            }
        }
        notation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;

    #[test]
    fn test_parse_reference_board() {
        let board: Board = "0000/0210/0111/0000".parse().unwrap();
        let expected = othello_position! {
            ....
            .ox.
            .xxx
            ....
        };
        assert_eq!(board, expected);
    }

    #[test]
    fn test_notation_round_trip() {
        let notation = "0000/0210/0111/0000";
        let board: Board = notation.parse().unwrap();
        assert_eq!(board.to_notation(), notation);
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let result = "000/0210/0111/0000".parse::<Board>();
        assert!(matches!(
            result,
            Err(BoardParseError::NotSquare { rows: 4, row: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_parse_rejects_non_square_board() {
        let result = "010/101".parse::<Board>();
        assert!(matches!(result, Err(BoardParseError::NotSquare { .. })));
    }

    #[test]
    fn test_parse_rejects_invalid_cell() {
        let result = "0000/0310/0111/0000".parse::<Board>();
        assert!(matches!(result, Err(BoardParseError::InvalidCell('3'))));
    }
}
