//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{select_move::SelectMoveArgs, watch::WatchArgs};

#[derive(StructOpt)]
#[structopt(name = "othello", about = "An Othello engine implemented in Rust")]
pub enum Othello {
    #[structopt(
        name = "select-move",
        about = "Determine the best move from a given position. The board is provided in row notation with `--board` (required), the player to move with `--color` (required). The search runs to `--depth` plies (default: 6) with the `--strategy` of your choice (default: alpha-beta); `--ordering` and `--caching` toggle the corresponding speedups."
    )]
    SelectMove(SelectMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the engine play against itself (or against a random mover with `--random-opponent`) on a `--size` board (default: 8) at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
}

impl crate::cli::commands::Command for Othello {
    fn execute(self) {
        match self {
            Self::SelectMove(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
