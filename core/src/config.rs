use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
    pub reposition_interval: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount, reposition_interval: u32) -> Self {
        Self {
            size,
            mines,
            reposition_interval,
        }
    }

    pub fn new(size: Coord2, mines: CellCount, reposition_interval: u32) -> Result<Self> {
        let config = Self::new_unchecked(size, mines, reposition_interval);
        config.validate()?;
        Ok(config)
    }

    pub fn square(size: Coord, mines: CellCount, reposition_interval: u32) -> Result<Self> {
        Self::new((size, size), mines, reposition_interval)
    }

    /// Derives the mine count from a density tier.
    pub fn from_difficulty(
        size: Coord2,
        difficulty: Difficulty,
        reposition_interval: u32,
    ) -> Result<Self> {
        Self::new(size, difficulty.mine_count(size), reposition_interval)
    }

    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows < 2 || cols < 2 {
            return Err(GameError::InvalidBoardSize { rows, cols });
        }

        let max = self.max_mines();
        if self.mines == 0 || self.mines > max {
            return Err(GameError::InvalidMineCount {
                mines: self.mines,
                max,
            });
        }

        if self.reposition_interval == 0 {
            return Err(GameError::InvalidRepositionInterval);
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }

    /// At least one cell has to stay safe.
    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(1)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((10, 10), 15, 3)
    }
}

/// Named mine density tiers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Extreme];

    /// Share of the board covered by mines, in percent.
    pub const fn density_percent(self) -> CellCount {
        match self {
            Self::Easy => 10,
            Self::Medium => 15,
            Self::Hard => 25,
            Self::Extreme => 35,
        }
    }

    /// Mine count for a board of `size`, rounded down.
    pub const fn mine_count(self, (rows, cols): Coord2) -> CellCount {
        let total = mult(rows, cols) as u32;
        (total * self.density_percent() as u32 / 100) as CellCount
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Extreme => "extreme",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.name().eq_ignore_ascii_case(s))
            .ok_or(GameError::UnknownDifficulty)
    }
}
