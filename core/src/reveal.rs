use alloc::vec;

use crate::*;

impl Board {
    /// Reveals the cell at `coords`, cascading through every neighbor of each revealed
    /// zero-hint safe cell.
    ///
    /// Out-of-bounds or already revealed targets are a no-op. The primitive does not
    /// special-case mines: a mine target is revealed without cascading, and the cascade
    /// itself does not stop at mine neighbors. Returns how many cells were newly revealed.
    pub fn reveal(&mut self, coords: Coord2) -> CellCount {
        if !self.contains(coords) {
            return 0;
        }

        let mut revealed = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let cell = self.cell_mut(visit_coords);
            if cell.revealed {
                continue;
            }

            cell.revealed = true;
            revealed += 1;
            let cascade = cell.is_empty_safe();
            log::trace!(
                "Revealed cell at {:?}, mine count: {}",
                visit_coords,
                cell.adjacent
            );

            if cascade {
                to_visit.extend(
                    self.iter_neighbors(visit_coords)
                        .filter(|&pos| !self[pos].revealed),
                );
            }
        }

        revealed
    }

    /// Reveals every mine on the board, returns how many were hidden.
    pub fn reveal_mines(&mut self) -> CellCount {
        let mut revealed = 0;
        for cell in self.cells_mut().filter(|cell| cell.mine && !cell.revealed) {
            cell.revealed = true;
            revealed += 1;
        }
        revealed
    }
}
