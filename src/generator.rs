use crate::error::Result;
use crate::{GameConfig, Grid};
use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces freshly mined grids from an owned random source.
#[derive(Debug, Clone)]
pub struct BoardGenerator<R = StdRng> {
    rng: R,
    seed: Option<u64>,
}

impl BoardGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Picks a random seed so the session can still be reported and replayed.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> BoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng, seed: None }
    }

    /// The seed this generator was created from, if it was created from one.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        generate(config, &mut self.rng)
    }
}

/// Places `config.mines` mines uniformly at random and derives neighbor counts.
///
/// Uses rejection sampling: a random cell is drawn and skipped if it is already
/// mined. Validation guarantees at least one safe cell, so the loop terminates.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Grid> {
    let GameConfig { rows, cols, mines } = config.validate()?;

    let mut mask = Array2::from_elem((rows, cols), false);
    let mut mines_placed = 0;
    while mines_placed < mines {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        let cell = &mut mask[[row, col]];
        if !*cell {
            *cell = true;
            mines_placed += 1;
        }
    }

    log::trace!("Placed {mines} mines on a {rows}x{cols} grid");
    Ok(Grid::from_mine_mask(mask))
}
