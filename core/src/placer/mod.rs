use alloc::vec::Vec;

use crate::*;
pub use random::*;

mod random;

/// Strategy that (re)distributes mines over the hidden part of a board.
pub trait MinePlacer {
    /// Moves all mines onto `mine_count` distinct hidden cells and refreshes every hint.
    ///
    /// Fails without touching the board when fewer than `mine_count` cells are hidden.
    fn place_mines(&mut self, board: &mut Board, mine_count: CellCount) -> Result<()>;
}

/// Collects the hidden cells eligible for a mine, failing fast when they cannot hold
/// `mine_count` mines.
pub(crate) fn mine_candidates(board: &Board, mine_count: CellCount) -> Result<Vec<Coord2>> {
    let candidates = board.unrevealed_coords();
    // candidate count is bounded by the board's `CellCount` total
    let available = candidates.len() as CellCount;
    if mine_count > available {
        log::warn!(
            "Cannot place mines, requested {} but only {} cells are hidden",
            mine_count,
            available
        );
        return Err(GameError::UnsatisfiablePlacement {
            requested: mine_count,
            available,
        });
    }
    Ok(candidates)
}

/// Replaces the board's mine layout with exactly `mines` and recomputes hints.
pub(crate) fn lay_mines(board: &mut Board, mines: &[Coord2]) {
    board.clear_mines();
    for &coords in mines {
        board.set_mine(coords);
    }
    board.compute_hints();
}
