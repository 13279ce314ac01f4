use crate::error::Result;
use crate::{Grid, Position};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagOutcome {
    /// Flag state of the cell after the call.
    pub flagged: bool,
    pub changed: bool,
}

/// Flips the flag on a hidden cell. Revealed cells cannot be flagged.
pub fn toggle_flag(grid: &mut Grid, pos: Position) -> Result<FlagOutcome> {
    let cell = grid.cell_mut(pos)?;
    if cell.is_revealed() {
        return Ok(FlagOutcome::default());
    }

    let flagged = !cell.is_flagged();
    cell.set_flagged(flagged);
    Ok(FlagOutcome {
        flagged,
        changed: true,
    })
}
