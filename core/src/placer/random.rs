use rand::rngs::SmallRng;

use super::*;

/// Uniform placement over the hidden cells, reproducible from its seed.
///
/// Picks the mines with a partial Fisher–Yates shuffle of the hidden coordinates, so a
/// placement always finishes in time proportional to the board size.
#[derive(Clone, Debug)]
pub struct RandomMinePlacer {
    seed: u64,
    rng: SmallRng,
}

impl RandomMinePlacer {
    pub fn new(seed: u64) -> Self {
        use rand::prelude::*;

        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinePlacer for RandomMinePlacer {
    fn place_mines(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()> {
        use rand::prelude::*;

        let mut candidates = mine_candidates(board, mine_count)?;
        let mine_count = usize::from(mine_count);

        for i in 0..mine_count {
            let pick = self.rng.random_range(i..candidates.len());
            candidates.swap(i, pick);
        }
        candidates.truncate(mine_count);

        lay_mines(board, &candidates);
        log::debug!(
            "Placed {} mines among {} hidden cells",
            mine_count,
            board.unrevealed_count()
        );
        Ok(())
    }
}
