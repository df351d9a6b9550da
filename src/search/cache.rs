use rustc_hash::FxHashMap;

use crate::board::Board;

/// Utility memoization table, keyed by board position alone.
///
/// Entries carry no bound type, depth, or evaluating color: a stored value
/// is reused verbatim wherever the same board reappears. Within one search
/// session that is sound because every node evaluates relative to the same
/// fixed color; reusing a table across sessions that evaluate for different
/// colors is not, which is why searchers own their table and expose
/// [`StateCache::clear`].
#[derive(Default)]
pub struct StateCache {
    table: FxHashMap<Board, i32>,
    hits: usize,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, board: &Board) -> Option<i32> {
        match self.table.get(board) {
            Some(&utility) => {
                self.hits += 1;
                Some(utility)
            }
            None => None,
        }
    }

    /// Stores unconditionally; re-entering a node overwrites (last write
    /// wins).
    pub fn store(&mut self, board: Board, utility: i32) {
        self.table.insert(board, utility);
    }

    pub fn clear(&mut self) {
        self.table.clear();
        self.hits = 0;
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}
