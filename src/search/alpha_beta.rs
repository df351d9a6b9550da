use log::debug;

use crate::board::{Board, Color, Square};
use crate::evaluate::compute_utility;
use crate::rules::{Rules, SquareList};

use super::StateCache;

/// Minimax with alpha-beta pruning.
///
/// Selects the same move as [`MinimaxSearcher`](super::MinimaxSearcher) at
/// the same depth while skipping subtrees that cannot change the result.
/// `alpha` carries the best utility MAX has secured on the path from the
/// root, `beta` the best MIN has; a node whose window closes stops expanding
/// its remaining children.
pub struct AlphaBetaSearcher {
    depth_limit: i32,
    caching: bool,
    ordering: bool,
    cache: StateCache,
    searched_node_count: usize,
    termination_count: usize,
}

impl AlphaBetaSearcher {
    pub fn new(depth_limit: i32) -> Self {
        Self {
            depth_limit,
            caching: false,
            ordering: false,
            cache: StateCache::new(),
            searched_node_count: 0,
            termination_count: 0,
        }
    }

    /// Enables or disables utility memoization.
    pub fn caching(mut self, enabled: bool) -> Self {
        self.caching = enabled;
        self
    }

    /// Enables or disables shallow move ordering. Ordering visits the most
    /// promising successors first to tighten the window early; it never
    /// changes the selected move's utility, though it may change which of
    /// several equal-utility moves is returned.
    pub fn ordering(mut self, enabled: bool) -> Self {
        self.ordering = enabled;
        self
    }

    pub fn depth_limit(&self) -> i32 {
        self.depth_limit
    }

    pub fn searched_node_count(&self) -> usize {
        self.searched_node_count
    }

    /// Number of nodes that cut off before expanding all children.
    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn reset_stats(&mut self) {
        self.searched_node_count = 0;
        self.termination_count = 0;
    }

    /// Picks the move with the highest utility for `color` over the full
    /// window, or `None` when `color` has no legal move.
    ///
    /// Ties keep the first move in enumeration order (after ordering, when
    /// enabled).
    pub fn select_move<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
    ) -> Option<Square> {
        let mut candidates = rules.legal_moves(board, color);
        if candidates.is_empty() {
            return None;
        }
        if self.ordering {
            self.order_descending(rules, board, color, &mut candidates);
        }

        let mut best_move = None;
        let mut alpha = i32::MIN;
        let beta = i32::MAX;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, color, square);
            let (_, utility) =
                self.min_node(rules, &successor, color, self.depth_limit - 1, alpha, beta);
            debug!("alpha-beta root move {}: utility {}", square, utility);
            if utility > alpha {
                alpha = utility;
                best_move = Some(square);
            }
        }
        best_move
    }

    pub(crate) fn max_node<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
        limit: i32,
        mut alpha: i32,
        beta: i32,
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

        let mut candidates = rules.legal_moves(board, color);
        if candidates.is_empty() {
            return (None, compute_utility(board, color));
        }
        if self.ordering {
            self.order_descending(rules, board, color, &mut candidates);
        }

        let mut best_move = None;
        let mut max_utility = i32::MIN;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, color, square);
            let (_, utility) = self.min_node(rules, &successor, color, limit - 1, alpha, beta);
            if utility > max_utility {
                best_move = Some(square);
                max_utility = utility;
            }
            alpha = alpha.max(max_utility);
            if alpha >= beta {
                self.termination_count += 1;
                break;
            }
        }

        if self.caching {
            self.cache.store(board.clone(), max_utility);
        }
        (best_move, max_utility)
    }

    pub(crate) fn min_node<R: Rules>(
        &mut self,
        rules: &R,
        board: &Board,
        color: Color,
        limit: i32,
        alpha: i32,
        mut beta: i32,
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
        let mut candidates = rules.legal_moves(board, opponent);
        if candidates.is_empty() {
            return (None, compute_utility(board, color));
        }
        if self.ordering {
            self.order_ascending(rules, board, opponent, color, &mut candidates);
        }

        let mut best_move = None;
        let mut min_utility = i32::MAX;
        for &square in candidates.iter() {
            let successor = rules.apply_move(board, opponent, square);
            let (_, utility) = self.max_node(rules, &successor, color, limit - 1, alpha, beta);
            if utility < min_utility {
                best_move = Some(square);
                min_utility = utility;
            }
            beta = beta.min(min_utility);
            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        if self.caching {
            self.cache.store(board.clone(), min_utility);
        }
        (best_move, min_utility)
    }

    /// Sorts MAX-node candidates best-for-`color` first by one-ply utility.
    /// The sort is stable, so equally rated moves keep enumeration order.
    fn order_descending<R: Rules>(
        &self,
        rules: &R,
        board: &Board,
        color: Color,
        candidates: &mut SquareList,
    ) {
        candidates.sort_by_cached_key(|&square| {
            -compute_utility(&rules.apply_move(board, color, square), color)
        });
    }

    /// Sorts MIN-node candidates worst-for-`color` first. The mover is the
    /// opponent; the utility lens stays `color`'s.
    fn order_ascending<R: Rules>(
        &self,
        rules: &R,
        board: &Board,
        mover: Color,
        color: Color,
        candidates: &mut SquareList,
    ) {
        candidates.sort_by_cached_key(|&square| {
            compute_utility(&rules.apply_move(board, mover, square), color)
        });
    }
}
