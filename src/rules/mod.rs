//! The rules-provider seam between the search layer and the game.
//!
//! The searchers and the evaluator only ever talk to a [`Rules`]
//! implementation, so the game mechanics stay swappable and the search layer
//! stays testable against synthetic rule sets. [`OthelloRules`] is the
//! concrete implementation used by the CLI, tests, and benchmarks.

mod othello;

pub use othello::OthelloRules;

use smallvec::SmallVec;

use crate::board::{Board, Color, Square};

/// Legal-move list. Inline capacity covers every position that occurs in
/// practice on an 8x8 board without spilling to the heap.
pub type SquareList = SmallVec<[Square; 32]>;

pub trait Rules {
    /// Enumerates the legal moves for `player`. An empty list signals that
    /// the player must pass (or that the position is terminal).
    fn legal_moves(&self, board: &Board, player: Color) -> SquareList;

    /// Returns the board produced by `player` playing `square`. Must only be
    /// called with a move previously returned by [`Rules::legal_moves`] for
    /// the same board and player.
    fn apply_move(&self, board: &Board, player: Color, square: Square) -> Board;

    /// Returns `(dark, light)` disk counts.
    fn disk_count(&self, board: &Board) -> (u32, u32);
}
