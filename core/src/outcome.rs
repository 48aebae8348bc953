use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// What a single click did to the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClickEvent {
    /// Stale or invalid input, nothing changed.
    Ignored,
    Revealed,
    /// The click was counted and the mines moved afterwards.
    Repositioned,
    Won,
    Lost,
}

impl ClickEvent {
    /// Whether this event could have caused an update to the game
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Ignored)
    }

    pub const fn ends_game(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for ClickEvent {
    fn default() -> Self {
        Self::Ignored
    }
}

/// Whether every safe cell is open.
pub fn is_cleared(board: &Board, mine_count: CellCount) -> bool {
    board.revealed_count() == board.total_cells() - mine_count
}
