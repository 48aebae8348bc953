use serde::{Deserialize, Serialize};

use crate::{Coord, Coord2};

/// One position on the board.
///
/// `revealed` never reverts once set; `mine` is only moved by a [`MinePlacer`](crate::MinePlacer)
/// while the cell is still hidden; `adjacent` is meaningful only for non-mine cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    coords: Coord2,
    pub(crate) revealed: bool,
    pub(crate) mine: bool,
    pub(crate) adjacent: u8,
}

impl Cell {
    pub const fn new(coords: Coord2) -> Self {
        Self {
            coords,
            revealed: false,
            mine: false,
            adjacent: 0,
        }
    }

    pub const fn coords(&self) -> Coord2 {
        self.coords
    }

    pub const fn row(&self) -> Coord {
        self.coords.0
    }

    pub const fn col(&self) -> Coord {
        self.coords.1
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn adjacent_mines(&self) -> u8 {
        self.adjacent
    }

    /// Whether revealing this cell would cascade into its neighbors.
    pub const fn is_empty_safe(&self) -> bool {
        !self.mine && self.adjacent == 0
    }
}
