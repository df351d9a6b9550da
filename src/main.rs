use structopt::StructOpt;

mod cli;

use cli::args::Othello;
use cli::commands::Command;

fn main() {
    env_logger::init();
    Othello::from_args().execute();
}
