//! Adversarial game-tree search.
//!
//! Two searchers share the same node semantics: plain depth-limited minimax
//! and an alpha-beta variant with optional move ordering. Both evaluate
//! every node for a fixed color with [`compute_utility`] at depth cutoffs
//! and terminal positions, and both can memoize node utilities in a
//! [`StateCache`].
//!
//! [`compute_utility`]: crate::evaluate::compute_utility

mod alpha_beta;
mod cache;
mod minimax;


use std::str::FromStr;

pub use alpha_beta::AlphaBetaSearcher;
pub use cache::StateCache;
pub use minimax::MinimaxSearcher;

/// A depth limit that is never reached by per-ply decrement; the search
/// runs until the game tree bottoms out.
pub const UNLIMITED_DEPTH: i32 = -1;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    Minimax,
    AlphaBeta,
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(Strategy::Minimax),
            "alpha-beta" => Ok(Strategy::AlphaBeta),
            _ => Err("must be `minimax` or `alpha-beta`"),
        }
    }
}
