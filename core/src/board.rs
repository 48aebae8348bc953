use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of [`Cell`]s, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a fully hidden board without mines.
    pub fn new((rows, cols): Coord2) -> Self {
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            // shape comes from `Coord` values so the indices fit back
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn cell(&self, coords: Coord2) -> Option<&Cell> {
        if self.contains(coords) {
            Some(&self.cells[nd_index(coords)])
        } else {
            None
        }
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.revealed)
    }

    pub fn unrevealed_count(&self) -> CellCount {
        self.count_where(|cell| !cell.revealed)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.mine)
    }

    pub fn mine_coords(&self) -> Vec<Coord2> {
        self.coords_where(|cell| cell.mine)
    }

    pub fn unrevealed_coords(&self) -> Vec<Coord2> {
        self.coords_where(|cell| !cell.revealed)
    }

    pub(crate) fn clear_mines(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.mine = false;
        }
    }

    pub(crate) fn set_mine(&mut self, coords: Coord2) {
        let cell = &mut self.cells[nd_index(coords)];
        debug_assert!(!cell.revealed, "mine placed on revealed cell {coords:?}");
        cell.mine = true;
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd_index(coords)]
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // total cells fit in `CellCount` by construction
        self.cells.iter().filter(|&cell| pred(cell)).count() as CellCount
    }

    fn coords_where(&self, pred: impl Fn(&Cell) -> bool) -> Vec<Coord2> {
        self.cells
            .iter()
            .filter(|&cell| pred(cell))
            .map(Cell::coords)
            .collect()
    }
}

fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}
