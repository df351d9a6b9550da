//! Watch command - watch the engine play against itself.

use rand::seq::SliceRandom;

use othello::board::{Board, Color, Square};
use othello::rules::{OthelloRules, Rules};
use othello::search::AlphaBetaSearcher;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: i32,
    #[structopt(long, default_value = "8", parse(try_from_str = parse_board_size))]
    pub size: usize,
    #[structopt(
        long = "random-opponent",
        help = "Pit the engine against a uniformly random mover"
    )]
    pub random_opponent: bool,
    #[structopt(
        long = "engine-color",
        default_value = "random",
        help = "Which color the engine plays when facing the random mover"
    )]
    pub engine_color: Color,
}

impl Command for WatchArgs {
    fn execute(self) {
        let rules = OthelloRules;
        let mut board = Board::starting_position(self.size);

        // Each color gets its own searcher so memoized utilities are never
        // reused across evaluation colors.
        let mut dark_searcher = AlphaBetaSearcher::new(self.depth)
            .caching(true)
            .ordering(true);
        let mut light_searcher = AlphaBetaSearcher::new(self.depth)
            .caching(true)
            .ordering(true);

        println!("{}", board);

        let mut mover = Color::Dark;
        let mut consecutive_passes = 0;
        while consecutive_passes < 2 {
            let selected = if self.random_opponent && mover != self.engine_color {
                random_move(&rules, &board, mover)
            } else {
                let searcher = match mover {
                    Color::Dark => &mut dark_searcher,
                    Color::Light => &mut light_searcher,
                };
                searcher.select_move(&rules, &board, mover)
            };

            match selected {
                Some(square) => {
                    board = rules.apply_move(&board, mover, square);
                    consecutive_passes = 0;
                    println!("{} plays {}", mover, square);
                    println!("{}", board);
                }
                None => {
                    consecutive_passes += 1;
                    println!("{} passes", mover);
                }
            }
            mover = mover.opposite();
        }

        let (dark, light) = rules.disk_count(&board);
        println!("final score: dark {} light {}", dark, light);
    }
}

fn random_move<R: Rules>(rules: &R, board: &Board, mover: Color) -> Option<Square> {
    let candidates = rules.legal_moves(board, mover);
    candidates.choose(&mut rand::thread_rng()).copied()
}

/// The starting position needs an even side of at least 4 for its center
/// disks; rejecting other sizes here keeps the error on structopt's
/// standard parse path.
fn parse_board_size(input: &str) -> Result<usize, String> {
    let size: usize = input
        .parse()
        .map_err(|_| format!("invalid board size: {}", input))?;
    if size >= 4 && size % 2 == 0 {
        Ok(size)
    } else {
        Err(format!(
            "board size must be an even number of at least 4, got {}",
            size
        ))
    }
}
