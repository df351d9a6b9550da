use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardParseError {
    #[error("board string is empty")]
    Empty,
    #[error("invalid cell character {0:?}; expected '0' (empty), '1' (dark) or '2' (light)")]
    InvalidCell(char),
    #[error("board must be square: found {rows} rows but row {row} has {cols} cells")]
    NotSquare { rows: usize, row: usize, cols: usize },
}
