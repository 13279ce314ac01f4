use crate::error::Result;
use crate::{BoardGenerator, GameConfig, Grid, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds a grid from an ASCII picture: `*` is a mine, anything else is safe.
/// Blank lines and surrounding whitespace are ignored.
///
/// ```text
/// *..
/// ...
/// ..*
/// ```
pub fn grid_from_layout(layout: &str) -> Result<Grid> {
    let lines: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let rows = lines.len();
    let cols = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);

    let mines: Vec<Position> = lines
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.chars()
                .enumerate()
                .filter(|&(_, c)| c == '*')
                .map(move |(col, _)| Position::new(row, col))
        })
        .collect();

    Grid::from_mines(rows, cols, &mines)
}

/// Counts adjacent mines the slow way, for checking derived counts.
pub fn count_adjacent_mines(grid: &Grid, pos: Position) -> u8 {
    grid.neighbors(pos)
        .filter(|&n| grid.get_cell(n).map(|cell| cell.is_mine()).unwrap_or(false))
        .count() as u8
}

/// Configuration for random test boards
#[derive(Debug, Clone)]
pub struct TestBoardConfig {
    pub max_rows: usize,
    pub max_cols: usize,
    pub max_mine_density: f64,
}

impl Default for TestBoardConfig {
    fn default() -> Self {
        Self {
            max_rows: 24,
            max_cols: 30,
            max_mine_density: 0.3,
        }
    }
}

/// Generates reproducible batches of valid random boards.
pub struct TestBoardGenerator {
    config: TestBoardConfig,
    rng: StdRng,
}

impl TestBoardGenerator {
    pub fn with_seed(config: TestBoardConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A valid configuration: at least one mine and at least one safe cell.
    pub fn random_config(&mut self) -> GameConfig {
        let rows = self.rng.gen_range(1..=self.config.max_rows);
        let min_cols = if rows == 1 { 2 } else { 1 };
        let cols = self.rng.gen_range(min_cols..=self.config.max_cols.max(2));
        let cells = rows * cols;
        let max_mines =
            ((cells as f64 * self.config.max_mine_density) as usize).clamp(1, cells - 1);
        let mines = self.rng.gen_range(1..=max_mines);
        GameConfig::new(rows, cols, mines)
    }

    pub fn generate(&mut self) -> (GameConfig, Grid) {
        let config = self.random_config();
        let seed = self.rng.gen();
        let grid = BoardGenerator::seeded(seed)
            .generate(config)
            .expect("random_config yields valid configurations");
        (config, grid)
    }

    pub fn generate_batch(&mut self, count: usize) -> Vec<(GameConfig, Grid)> {
        (0..count).map(|_| self.generate()).collect()
    }
}
