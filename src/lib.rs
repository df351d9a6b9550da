//! An Othello/Reversi move-selection engine.
//!
//! The `search` module hosts the depth-limited minimax and alpha-beta
//! searchers, which consult the `evaluate` module for board scores and a
//! [`rules::Rules`] implementation for legal moves and successor boards.

pub mod board;
pub mod evaluate;
pub mod rules;
pub mod search;
