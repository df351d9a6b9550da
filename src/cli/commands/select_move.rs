//! Select-move command - determine the best move from a position.

use othello::board::{Board, Color};
use othello::rules::OthelloRules;
use othello::search::{AlphaBetaSearcher, MinimaxSearcher, Strategy};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct SelectMoveArgs {
    #[structopt(long = "board")]
    pub board: Board,
    #[structopt(long = "color")]
    pub color: Color,
    #[structopt(short, long, default_value = "6")]
    pub depth: i32,
    #[structopt(long, default_value = "alpha-beta")]
    pub strategy: Strategy,
    #[structopt(long)]
    pub caching: bool,
    #[structopt(long)]
    pub ordering: bool,
}

impl Command for SelectMoveArgs {
    fn execute(self) {
        let rules = OthelloRules;

        let selected = match self.strategy {
            Strategy::Minimax => {
                if self.ordering {
                    log::warn!("move ordering only applies to the alpha-beta strategy");
                }
                MinimaxSearcher::new(self.depth)
                    .caching(self.caching)
                    .select_move(&rules, &self.board, self.color)
            }
            Strategy::AlphaBeta => AlphaBetaSearcher::new(self.depth)
                .caching(self.caching)
                .ordering(self.ordering)
                .select_move(&rules, &self.board, self.color),
        };

        match selected {
            Some(square) => println!("{} {}", square.col, square.row),
            None => println!("pass"),
        }
    }
}
