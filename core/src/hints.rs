use crate::*;

impl Board {
    /// Number of mines in the clipped Moore neighborhood of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].mine)
            .count() as u8
    }

    /// Recomputes the hint of every non-mine cell from the current mine layout.
    ///
    /// Mine cells keep whatever hint they had before; nothing should read it.
    pub fn compute_hints(&mut self) {
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                if self[coords].mine {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self.cell_mut(coords).adjacent = count;
            }
        }
    }
}
