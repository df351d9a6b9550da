//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod select_move;
pub mod watch;
