use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the player may see of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub revealed: bool,
    /// Known only once the cell is revealed or the game is lost.
    pub mine: Option<bool>,
    /// Hint of a revealed safe cell.
    pub adjacent: Option<u8>,
}

impl CellView {
    fn from_cell(cell: &Cell, status: GameStatus) -> Self {
        let mine_visible = cell.is_revealed() || status == GameStatus::Lost;
        Self {
            row: cell.row(),
            col: cell.col(),
            revealed: cell.is_revealed(),
            mine: mine_visible.then_some(cell.is_mine()),
            adjacent: (cell.is_revealed() && !cell.is_mine()).then_some(cell.adjacent_mines()),
        }
    }
}

/// Read-only view of a game for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub size: Coord2,
    pub mines: CellCount,
    pub turn: u32,
    pub reposition_interval: u32,
    pub turns_until_reposition: u32,
    pub status: GameStatus,
    pub last_event: ClickEvent,
    /// Row-major.
    pub cells: Vec<CellView>,
}

impl GameSnapshot {
    pub fn from_engine<P>(engine: &GameEngine<P>) -> Self {
        let status = engine.status();
        Self {
            size: engine.size(),
            mines: engine.total_mines(),
            turn: engine.turn(),
            reposition_interval: engine.reposition_interval(),
            turns_until_reposition: engine.turns_until_reposition(),
            status,
            last_event: engine.last_event(),
            cells: engine
                .board()
                .iter()
                .map(|cell| CellView::from_cell(cell, status))
                .collect(),
        }
    }

    pub fn cell(&self, (row, col): Coord2) -> Option<&CellView> {
        let (rows, cols) = self.size;
        if row < rows && col < cols {
            self.cells
                .get(usize::from(row) * usize::from(cols) + usize::from(col))
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(usize::from(self.size.1))
    }
}

impl<P> GameEngine<P> {
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_engine(self)
    }
}
