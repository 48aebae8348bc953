use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {rows}x{cols}, both sides must be at least 2")]
    InvalidBoardSize { rows: Coord, cols: Coord },
    #[error("Invalid mine count {mines}, must be between 1 and {max}")]
    InvalidMineCount { mines: CellCount, max: CellCount },
    #[error("Reposition interval must be at least 1")]
    InvalidRepositionInterval,
    #[error("Cannot place {requested} mines, only {available} cells are unrevealed")]
    UnsatisfiablePlacement {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Unknown difficulty, expected easy, medium, hard or extreme")]
    UnknownDifficulty,
}

pub type Result<T> = core::result::Result<T, GameError>;
