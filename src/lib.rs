pub mod board;
pub mod config;
pub mod error;
pub mod flag;
pub mod game;
pub mod generator;
pub mod position;
pub mod reveal;
pub mod session;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use board::{Cell, Grid};
pub use config::{Difficulty, GameConfig};
pub use error::{GameError, ParseDifficultyError};
pub use flag::FlagOutcome;
pub use game::{FlagResponse, Game, RevealResponse, Snapshot};
pub use generator::BoardGenerator;
pub use position::Position;
pub use reveal::RevealOutcome;
pub use session::{GameState, Session};
