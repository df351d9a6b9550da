//! Command-line interface for the Othello engine.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;
