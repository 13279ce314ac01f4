use crate::error::Result;
use crate::{Grid, Position};
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    /// Every cell whose revealed flag flipped during the call, in reveal order.
    pub changed_cells: Vec<Position>,
    pub hit_mine: bool,
}

impl RevealOutcome {
    pub fn is_noop(&self) -> bool {
        self.changed_cells.is_empty()
    }
}

/// Reveals one cell, cascading over the zero-count region around it.
///
/// Revealed or flagged targets are a no-op. A mine is revealed alone and
/// reported through `hit_mine`.
pub fn reveal(grid: &mut Grid, pos: Position) -> Result<RevealOutcome> {
    let cell = grid.cell_mut(pos)?;
    if cell.is_revealed() || cell.is_flagged() {
        return Ok(RevealOutcome::default());
    }

    cell.set_revealed();
    let mut outcome = RevealOutcome {
        changed_cells: vec![pos],
        hit_mine: cell.is_mine(),
    };

    if !cell.is_mine() && cell.neighbor_mine_count() == 0 {
        flood_fill(grid, pos, &mut outcome.changed_cells)?;
        log::trace!(
            "Reveal at {pos} cascaded over {} cells",
            outcome.changed_cells.len()
        );
    }

    Ok(outcome)
}

// `is_revealed` doubles as the visited marker, so each cell is queued at most once.
fn flood_fill(grid: &mut Grid, start: Position, changed: &mut Vec<Position>) -> Result<()> {
    let mut to_visit = VecDeque::from([start]);

    while let Some(current) = to_visit.pop_front() {
        let neighbors: Vec<Position> = grid.neighbors(current).collect();
        for neighbor in neighbors {
            let cell = grid.cell_mut(neighbor)?;
            if cell.is_mine() || cell.is_revealed() || cell.is_flagged() {
                continue;
            }

            cell.set_revealed();
            changed.push(neighbor);
            if cell.neighbor_mine_count() == 0 {
                to_visit.push_back(neighbor);
            }
        }
    }

    Ok(())
}
