//! Static board evaluation.
//!
//! [`compute_utility`] is the exact disk-count margin, used both as the true
//! utility of terminal positions and as the cutoff value when the search
//! exhausts its depth limit. [`compute_heuristic`] is the richer positional
//! estimate (corners, edges, stability, mobility, disks) with weights that
//! shift across game phases; it is the substitute an integrator can plug in
//! at the depth-limit boundary.

pub mod weights;

use crate::board::{Board, Color, Square};
use crate::rules::Rules;

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

/// Disk-count margin for `color`: positive favors `color`.
pub fn compute_utility(board: &Board, color: Color) -> i32 {
    let (dark, light) = board.disk_count();
    let diff = dark as i32 - light as i32;
    match color {
        Color::Dark => diff,
        Color::Light => -diff,
    }
}

/// Weighted positional estimate for `color`: positive favors `color`.
pub fn compute_heuristic<R: Rules>(rules: &R, board: &Board, color: Color) -> i32 {
    let opponent = color.opposite();
    let size = board.size();
    let last = size - 1;

    let corners = [
        Square::new(0, 0),
        Square::new(0, last),
        Square::new(last, 0),
        Square::new(last, last),
    ];
    let mut corner_score = 0;
    for &corner in corners.iter() {
        corner_score += occupancy(board, corner, color);
    }

    let mut edge_score = 0;
    for i in 1..last {
        edge_score += occupancy(board, Square::new(i, 0), color);
        edge_score += occupancy(board, Square::new(i, last), color);
        edge_score += occupancy(board, Square::new(0, i), color);
        edge_score += occupancy(board, Square::new(last, i), color);
    }

    let mut stable_score = 0;
    for col in 0..size {
        for row in 0..size {
            let square = Square::new(col, row);
            if let Some(owner) = board.get(square) {
                if is_stable(board, square, owner) {
                    stable_score += if owner == color { 1 } else { -1 };
                }
            }
        }
    }

    let mobility_score = rules.legal_moves(board, color).len() as i32
        - rules.legal_moves(board, opponent).len() as i32;

    let disk_score = compute_utility(board, color);

    let w = weights::for_phase(board.empty_count(), board.total_cells());
    w.corner * corner_score
        + w.edge * edge_score
        + w.stable * stable_score
        + w.mobility * mobility_score
        + w.disk * disk_score
}

fn occupancy(board: &Board, square: Square, color: Color) -> i32 {
    match board.get(square) {
        Some(occupant) if occupant == color => 1,
        Some(_) => -1,
        None => 0,
    }
}

/// A disk is stable when at least one radial direction runs to the board
/// boundary crossing neither an empty cell nor an opposing disk. Boundary
/// disks qualify trivially through the off-board direction.
fn is_stable(board: &Board, square: Square, owner: Color) -> bool {
    let opponent = owner.opposite();
    let size = board.size() as isize;

    'directions: for &(dcol, drow) in DIRECTIONS.iter() {
        let mut col = square.col as isize + dcol;
        let mut row = square.row as isize + drow;
        while col >= 0 && col < size && row >= 0 && row < size {
            match board.get(Square::new(col as usize, row as usize)) {
                None => continue 'directions,
                Some(c) if c == opponent => continue 'directions,
                Some(_) => {
                    col += dcol;
                    row += drow;
                }
            }
        }
        return true;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::othello_position;
    use crate::rules::OthelloRules;

    fn reference_boards() -> Vec<Board> {
        vec![
            othello_position! {
                ....
                .ox.
                .xxx
                ....
            },
            othello_position! {
                .x..
                .xx.
                .xox
                ...o
            },
            othello_position! {
                ....
                .ox.
                .xxx
                .xx.
            },
            othello_position! {
                .x..
                .oo.
                .xox
                ..oo
            },
            othello_position! {
                x..o
                xxo.
                xxxx
                xooo
            },
            othello_position! {
                .x..
                .xx.
                ooox
                ...o
            },
        ]
    }

    #[test]
    fn test_compute_utility_reference_boards() {
        let expected = [3, 3, 5, -2, 3, 0];
        for (board, &value) in reference_boards().iter().zip(expected.iter()) {
            assert_eq!(compute_utility(board, Color::Dark), value);
            assert_eq!(compute_utility(board, Color::Light), -value);
        }
    }

    #[test]
    fn test_heuristic_early_phase() {
        // 11 of 16 cells empty: early phase, only corners, edges and
        // mobility count. No corners are taken, dark holds one edge cell
        // and mobility is even (3 moves each), so the estimate is one edge
        // weight.
        let rules = OthelloRules;
        let board = othello_position! {
            ....
            .ox.
            .xxx
            ....
        };
        assert_eq!(rules.legal_moves(&board, Color::Dark).len(), 3);
        assert_eq!(rules.legal_moves(&board, Color::Light).len(), 3);
        assert_eq!(compute_heuristic(&rules, &board, Color::Dark), 5);
        assert_eq!(compute_heuristic(&rules, &board, Color::Light), -5);
    }

    #[test]
    fn test_heuristic_late_phase() {
        // 3 of 16 cells empty: late phase, corners, stability and disks
        // count. Corners split evenly; dark has 8 stable disks to light's 5
        // and leads the disk count 8 to 5.
        let rules = OthelloRules;
        let board = othello_position! {
            x..o
            xxo.
            xxxx
            xooo
        };
        assert_eq!(compute_heuristic(&rules, &board, Color::Dark), 96);
        assert_eq!(compute_heuristic(&rules, &board, Color::Light), -96);
    }

    #[test]
    fn test_boundary_disks_are_stable() {
        let board = othello_position! {
            x...
            ....
            ....
            ...o
        };
        assert!(is_stable(&board, Square::new(0, 0), Color::Dark));
        assert!(is_stable(&board, Square::new(3, 3), Color::Light));
    }

    #[test]
    fn test_interior_disk_stability_requires_clean_line() {
        let board = othello_position! {
            o...
            .x..
            ..x.
            ...x
        };
        // (1,1) reaches the boundary through (2,2) and (3,3) along one
        // diagonal without crossing light disks.
        assert!(is_stable(&board, Square::new(1, 1), Color::Dark));

        let blocked = othello_position! {
            o...
            .x..
            ..o.
            ....
        };
        // Every line from (1,1) is either blocked by a light disk or runs
        // through empty cells.
        assert!(!is_stable(&blocked, Square::new(1, 1), Color::Dark));
    }

    #[test]
    fn test_terminal_utility_on_full_board() {
        let board = othello_position! {
            xxxx
            oooo
            xxxx
            xxoo
        };
        assert_eq!(compute_utility(&board, Color::Dark), 4);
        assert_eq!(compute_utility(&board, Color::Light), -4);
    }
}
