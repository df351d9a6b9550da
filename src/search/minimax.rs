use log::debug;

use crate::board::{Board, Color, Square};
use crate::evaluate::compute_utility;
use crate::rules::Rules;

use super::StateCache;

/// Depth-limited minimax move selection.
///
/// The searcher is parameterized by a fixed `color` argument at call time:
/// every node in the tree evaluates the board for that color, no matter
/// whose turn it is. MAX nodes expand `color`'s moves, MIN nodes the
/// opponent's, and the depth limit decrements one ply per level. A negative
/// limit never reaches zero by decrement and therefore searches to the
/// terminal positions.
pub struct MinimaxSearcher {
    depth_limit: i32,
    caching: bool,
    cache: StateCache,
    searched_node_count: usize,
}

impl MinimaxSearcher {
    pub fn new(depth_limit: i32) -> Self {
        Self {
            depth_limit,
            caching: false,
            cache: StateCache::new(),
            searched_node_count: 0,
        }
    }

    /// Enables or disables utility memoization.
    pub fn caching(mut self, enabled: bool) -> Self {
        self.caching = enabled;
        self
    }

    pub fn depth_limit(&self) -> i32 {
        self.depth_limit
    }

    pub fn searched_node_count(&self) -> usize {
        self.searched_node_count
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn reset_stats(&mut self) {
        self.searched_node_count = 0;
    }

    /// Picks the move with the highest minimax utility for `color`, or
    /// `None` when `color` has no legal move (a pass).
    ///
    /// Ties keep the first move in enumeration order.
    pub fn select_move<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
    ) -> Option<Square> {
        let candidates = rules.legal_moves(board, color);
        if candidates.is_empty() {
            return None;
        }

        let mut best_move = None;
        let mut best_utility = i32::MIN;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, color, square);
            let (_, utility) = self.min_node(rules, &successor, color, self.depth_limit - 1);
            debug!("minimax root move {}: utility {}", square, utility);
            if utility > best_utility {
                best_utility = utility;
                best_move = Some(square);
            }
        }
        best_move
    }

    /// Evaluates a node where `color` is to move.
    ///
    /// Returns the chosen move alongside the utility; a depth cutoff,
    /// terminal position, or cache hit yields no move. Cache entries hold
    /// only utilities, so callers that need the move must not rely on a
    /// warm cache.
    pub(crate) fn max_node<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
        limit: i32,
    ) -> (Option<Square>, i32) {
        self.searched_node_count += 1;

        if limit == 0 {
            return (None, compute_utility(board, color));
        }
        if self.caching {
            if let Some(utility) = self.cache.get(board) {
                return (None, utility);
            }
        }

        let candidates = rules.legal_moves(board, color);
        if candidates.is_empty() {
            return (None, compute_utility(board, color));
        }

        let mut best_move = None;
        let mut max_utility = i32::MIN;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, color, square);
            let (_, utility) = self.min_node(rules, &successor, color, limit - 1);
            if utility > max_utility {
                best_move = Some(square);
                max_utility = utility;
            }
        }

        if self.caching {
            self.cache.store(board.clone(), max_utility);
        }
        (best_move, max_utility)
    }

    /// Evaluates a node where the opponent of `color` is to move.
    pub(crate) fn min_node<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
        limit: i32,
    ) -> (Option<Square>, i32) {
        self.searched_node_count += 1;

        if limit == 0 {
            return (None, compute_utility(board, color));
        }
        if self.caching {
            if let Some(utility) = self.cache.get(board) {
                return (None, utility);
            }
        }

        let opponent = color.opposite();
        let candidates = rules.legal_moves(board, opponent);
        if candidates.is_empty() {
            return (None, compute_utility(board, color));
        }

        let mut best_move = None;
        let mut min_utility = i32::MAX;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, opponent, square);
            let (_, utility) = self.max_node(rules, &successor, color, limit - 1);
            if utility < min_utility {
                best_move = Some(square);
                min_utility = utility;
            }
        }

        if self.caching {
            self.cache.store(board.clone(), min_utility);
        }
        (best_move, min_utility)
    }
}
