use crate::error::{GameError, ParseDifficultyError, Result};
use crate::Cell;
use std::fmt;
use std::mem::size_of;
use std::str::FromStr;

/// Largest cell count whose backing storage stays within `isize::MAX` bytes.
const MAX_CELLS: usize = isize::MAX as usize / size_of::<Cell>();

/// Board dimensions and mine count for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub mines: usize,
}

impl GameConfig {
    pub const fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self { rows, cols, mines }
    }

    /// `None` when the board is too large to allocate.
    pub fn total_cells(&self) -> Option<usize> {
        self.rows
            .checked_mul(self.cols)
            .filter(|&cells| cells <= MAX_CELLS)
    }

    /// A board needs at least one mine and at least one safe cell.
    pub fn validate(self) -> Result<Self> {
        // 0 < mines < cells also rules out empty dimensions
        let fits =
            matches!(self.total_cells(), Some(cells) if self.mines > 0 && self.mines < cells);
        if !fits {
            return Err(GameError::Configuration {
                rows: self.rows,
                cols: self.cols,
                mines: self.mines,
            });
        }
        Ok(self)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Expert,
    ];

    pub const fn config(self) -> GameConfig {
        match self {
            Difficulty::Beginner => GameConfig::new(9, 9, 10),
            Difficulty::Intermediate => GameConfig::new(16, 16, 40),
            Difficulty::Expert => GameConfig::new(16, 30, 99),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "expert" | "hard" => Ok(Difficulty::Expert),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}
