use crate::board::{Board, Color, Square};

use super::{Rules, SquareList};

/// The eight radial directions as `(dcol, drow)` deltas.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Standard Othello rules for any square board size.
///
/// A move is legal on an empty cell when, in at least one direction, it
/// brackets an unbroken run of opponent disks against one of the mover's own
/// disks. Applying a move places the disk and flips every bracketed run.
#[derive(Clone, Copy, Default, Debug)]
pub struct OthelloRules;

impl OthelloRules {
    fn is_legal(&self, board: &Board, player: Color, square: Square) -> bool {
        if !board.is_empty_at(square) {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&direction| self.captures_in_direction(board, player, square, direction))
    }

    /// True when playing `square` would flip at least one disk along
    /// `direction`.
    fn captures_in_direction(
        &self,
        board: &Board,
        player: Color,
        square: Square,
        direction: (isize, isize),
    ) -> bool {
        let opponent = player.opposite();
        let mut cursor = step(board, square, direction);
        let mut found_opponent = false;

        while let Some(next) = cursor {
            match board.get(next) {
                None => return false,
                Some(color) if color == opponent => {
                    found_opponent = true;
                    cursor = step(board, next, direction);
                }
                Some(_) => return found_opponent,
            }
        }

        false
    }

    fn flip_in_direction(
        &self,
        board: &mut Board,
        player: Color,
        square: Square,
        direction: (isize, isize),
    ) {
        if !self.captures_in_direction(board, player, square, direction) {
            return;
        }

        let opponent = player.opposite();
        let mut cursor = step(board, square, direction);
        while let Some(next) = cursor {
            if board.get(next) == Some(opponent) {
                board.put(next, player);
                cursor = step(board, next, direction);
            } else {
                break;
            }
        }
    }
}

impl Rules for OthelloRules {
    /// Enumerates column-major (column outer, row inner). The order is
    /// observable: the searchers break utility ties in favor of the
    /// first-enumerated move.
    fn legal_moves(&self, board: &Board, player: Color) -> SquareList {
        let mut moves = SquareList::new();
        for col in 0..board.size() {
            for row in 0..board.size() {
                let square = Square::new(col, row);
                if self.is_legal(board, player, square) {
                    moves.push(square);
                }
            }
        }
        moves
    }

    fn apply_move(&self, board: &Board, player: Color, square: Square) -> Board {
        debug_assert!(self.is_legal(board, player, square));
        let mut next = board.clone();
        next.put(square, player);
        for &direction in DIRECTIONS.iter() {
            // Flip decisions are made against the pre-placement board shape;
            // placing the mover's disk first does not disturb them because
            // the scan starts one step out from the played square.
            self.flip_in_direction(&mut next, player, square, direction);
        }
        next
    }

    fn disk_count(&self, board: &Board) -> (u32, u32) {
        board.disk_count()
    }
}

/// Advances one step from `square`, returning `None` at the boundary.
fn step(board: &Board, square: Square, (dcol, drow): (isize, isize)) -> Option<Square> {
    let col = square.col as isize + dcol;
    let row = square.row as isize + drow;
    let size = board.size() as isize;
    if col >= 0 && col < size && row >= 0 && row < size {
        Some(Square::new(col as usize, row as usize))
    } else {
        None
    }
}
