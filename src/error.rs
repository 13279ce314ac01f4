use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board configuration: {rows}x{cols} with {mines} mines")]
    Configuration {
        rows: usize,
        cols: usize,
        mines: usize,
    },
    #[error("Position {position} is outside the {rows}x{cols} grid")]
    OutOfRange {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty '{0}', expected beginner, intermediate or expert")]
pub struct ParseDifficultyError(pub String);

pub type Result<T> = std::result::Result<T, GameError>;
