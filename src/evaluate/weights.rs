//! Feature weights for the positional heuristic.

pub const CORNER_WEIGHT: i32 = 25;
pub const EDGE_WEIGHT: i32 = 5;
pub const STABLE_WEIGHT: i32 = 15;
pub const MOBILITY_WEIGHT: i32 = 10;
pub const DISK_WEIGHT: i32 = 1;

/// Per-phase weighting of the five heuristic features.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PhaseWeights {
    pub corner: i32,
    pub edge: i32,
    pub stable: i32,
    pub mobility: i32,
    pub disk: i32,
}

/// Selects weights from the fraction of empty cells.
///
/// Early game (strictly more than half the cells empty) plays for corners
/// and mobility; late game (a fifth or less empty) plays for stability and
/// raw disk count. Both boundaries are strict on the larger-phase side, so a
/// board with exactly half its cells empty is mid-game.
pub fn for_phase(empty: usize, total: usize) -> PhaseWeights {
    if 2 * empty > total {
        PhaseWeights {
            corner: CORNER_WEIGHT,
            edge: EDGE_WEIGHT,
            stable: 0,
            mobility: MOBILITY_WEIGHT,
            disk: 0,
        }
    } else if 5 * empty > total {
        PhaseWeights {
            corner: CORNER_WEIGHT,
            edge: EDGE_WEIGHT / 2,
            stable: STABLE_WEIGHT,
            mobility: MOBILITY_WEIGHT / 2,
            disk: DISK_WEIGHT,
        }
    } else {
        PhaseWeights {
            corner: CORNER_WEIGHT,
            edge: 0,
            stable: 2 * STABLE_WEIGHT,
            mobility: 0,
            disk: 2 * DISK_WEIGHT,
        }
    }
}
