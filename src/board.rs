use crate::error::{GameError, Result};
use crate::{GameConfig, Position};
use ndarray::Array2;

/// One grid position. Cells are mutated in place by the reveal and flag
/// operations and are never replaced individually.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    is_mine: bool,
    is_revealed: bool,
    is_flagged: bool,
    neighbor_mine_count: u8,
}

impl Cell {
    pub fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mines among the adjacent cells, fixed when the grid is built.
    /// Present but meaningless on mine cells.
    pub fn neighbor_mine_count(&self) -> u8 {
        self.neighbor_mine_count
    }

    pub(crate) fn set_revealed(&mut self) {
        self.is_revealed = true;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.is_flagged = flagged;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
    mine_count: usize,
}

impl Grid {
    /// Builds a grid with mines at exactly the given positions. Repeated or
    /// out-of-bounds positions make the layout invalid.
    pub fn from_mines(rows: usize, cols: usize, mines: &[Position]) -> Result<Self> {
        let config = GameConfig::new(rows, cols, mines.len()).validate()?;
        let invalid_layout = || GameError::Configuration {
            rows: config.rows,
            cols: config.cols,
            mines: config.mines,
        };

        let mut mask = Array2::from_elem((rows, cols), false);
        for &pos in mines {
            let cell = mask
                .get_mut([pos.row, pos.col])
                .ok_or_else(invalid_layout)?;
            if *cell {
                return Err(invalid_layout());
            }
            *cell = true;
        }

        Ok(Self::from_mine_mask(mask))
    }

    /// Derives every cell's neighbor count from the mine layout.
    pub(crate) fn from_mine_mask(mask: Array2<bool>) -> Self {
        let (rows, cols) = mask.dim();
        let cells = Array2::from_shape_fn((rows, cols), |(row, col)| {
            let neighbor_mine_count = Position::new(row, col)
                .neighbors(rows, cols)
                .filter(|p| mask[[p.row, p.col]])
                .count() as u8;
            Cell {
                is_mine: mask[[row, col]],
                neighbor_mine_count,
                ..Cell::default()
            }
        });
        let mine_count = mask.iter().filter(|&&is_mine| is_mine).count();

        Self { cells, mine_count }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    pub fn safe_cell_count(&self) -> usize {
        self.total_cells() - self.mine_count
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn validate(&self, pos: Position) -> Result<Position> {
        if self.is_within_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::OutOfRange {
                position: pos,
                rows: self.rows(),
                cols: self.cols(),
            })
        }
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell> {
        let pos = self.validate(pos)?;
        Ok(&self.cells[[pos.row, pos.col]])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell> {
        let pos = self.validate(pos)?;
        Ok(&mut self.cells[[pos.row, pos.col]])
    }

    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> {
        pos.neighbors(self.rows(), self.cols())
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| (Position::new(row, col), cell))
    }

    pub fn revealed_safe_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.is_revealed && !cell.is_mine)
            .count()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_revealed)
    }

    /// Exposes every hidden cell, flagged or not, and returns the ones that changed.
    pub(crate) fn reveal_all(&mut self) -> Vec<Position> {
        self.cells
            .indexed_iter_mut()
            .filter(|(_, cell)| !cell.is_revealed)
            .map(|((row, col), cell)| {
                cell.set_revealed();
                Position::new(row, col)
            })
            .collect()
    }
}
