use crate::error::Result;
use crate::flag::{self, FlagOutcome};
use crate::reveal::{self, RevealOutcome};
use crate::{generator, GameConfig, Grid, Position};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_finished(self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

/// One game in progress or concluded. Owns its grid exclusively.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    state: GameState,
    elapsed_seconds: u64,
    flags_remaining: i64,
}

impl Session {
    pub fn start<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Ok(Self::with_grid(generator::generate(config, rng)?))
    }

    pub fn with_grid(grid: Grid) -> Self {
        let flags_remaining = grid.mine_count() as i64;
        Self {
            grid,
            state: GameState::Playing,
            elapsed_seconds: 0,
            flags_remaining,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Mine count minus flags placed. Goes negative when the player over-flags.
    pub fn flags_remaining(&self) -> i64 {
        self.flags_remaining
    }

    pub fn tick(&mut self) -> u64 {
        if self.state == GameState::Playing {
            self.elapsed_seconds += 1;
        }
        self.elapsed_seconds
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealOutcome> {
        self.grid.validate(pos)?;
        if self.state.is_finished() {
            return Ok(RevealOutcome::default());
        }

        let outcome = reveal::reveal(&mut self.grid, pos)?;
        if outcome.hit_mine {
            self.finish(GameState::Lost);
        } else if self.grid.revealed_safe_count() == self.grid.safe_cell_count() {
            self.finish(GameState::Won);
        }
        Ok(outcome)
    }

    pub fn toggle_flag(&mut self, pos: Position) -> Result<FlagOutcome> {
        self.grid.validate(pos)?;
        if self.state.is_finished() {
            return Ok(FlagOutcome::default());
        }

        let outcome = flag::toggle_flag(&mut self.grid, pos)?;
        if outcome.changed {
            self.flags_remaining += if outcome.flagged { -1 } else { 1 };
        }
        Ok(outcome)
    }

    fn finish(&mut self, state: GameState) {
        self.state = state;
        let exposed = self.grid.reveal_all();
        log::debug!(
            "Game ended {:?} after {}s, exposed {} remaining cells",
            state,
            self.elapsed_seconds,
            exposed.len()
        );
    }
}
