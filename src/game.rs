use crate::error::Result;
use crate::{
    BoardGenerator, FlagOutcome, GameConfig, GameState, Grid, Position, RevealOutcome, Session,
};
use rand::rngs::StdRng;
use rand::Rng;

/// Read-only view a front-end renders after each command.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: &'a Grid,
    pub state: GameState,
    pub elapsed_seconds: u64,
    pub flags_remaining: i64,
}

#[derive(Debug, Clone)]
pub struct RevealResponse<'a> {
    pub snapshot: Snapshot<'a>,
    pub outcome: RevealOutcome,
}

impl RevealResponse<'_> {
    pub fn hit_mine(&self) -> bool {
        self.outcome.hit_mine
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlagResponse<'a> {
    pub snapshot: Snapshot<'a>,
    pub outcome: FlagOutcome,
}

impl FlagResponse<'_> {
    pub fn flagged(&self) -> bool {
        self.outcome.flagged
    }
}

/// Entry point for front-ends. Every command takes `&mut self` and runs to
/// completion; share a `Game` across threads behind a `Mutex`.
pub struct Game<R = StdRng> {
    generator: BoardGenerator<R>,
    session: Session,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, BoardGenerator::from_entropy())
    }

    pub fn seeded(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, BoardGenerator::seeded(seed))
    }

    /// Starts on a fixed layout. Later `new_game` calls draw random boards.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            generator: BoardGenerator::from_entropy(),
            session: Session::with_grid(grid),
        }
    }
}

impl<R: Rng> Game<R> {
    pub fn with_generator(config: GameConfig, mut generator: BoardGenerator<R>) -> Result<Self> {
        let grid = generator.generate(config)?;
        log_new_game(config, generator.seed());
        Ok(Self {
            generator,
            session: Session::with_grid(grid),
        })
    }

    /// Discards the current session and starts over. On error the current
    /// session is kept.
    pub fn new_game(&mut self, config: GameConfig) -> Result<Snapshot<'_>> {
        let grid = self.generator.generate(config)?;
        log_new_game(config, self.generator.seed());
        self.session = Session::with_grid(grid);
        Ok(self.snapshot())
    }

    pub fn reveal(&mut self, pos: Position) -> Result<RevealResponse<'_>> {
        let outcome = self.session.reveal(pos)?;
        Ok(RevealResponse {
            snapshot: self.snapshot(),
            outcome,
        })
    }

    pub fn toggle_flag(&mut self, pos: Position) -> Result<FlagResponse<'_>> {
        let outcome = self.session.toggle_flag(pos)?;
        Ok(FlagResponse {
            snapshot: self.snapshot(),
            outcome,
        })
    }

    pub fn tick(&mut self) -> u64 {
        self.session.tick()
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.session.grid(),
            state: self.session.state(),
            elapsed_seconds: self.session.elapsed_seconds(),
            flags_remaining: self.session.flags_remaining(),
        }
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn seed(&self) -> Option<u64> {
        self.generator.seed()
    }
}

fn log_new_game(config: GameConfig, seed: Option<u64>) {
    let GameConfig { rows, cols, mines } = config;
    match seed {
        Some(seed) => log::debug!("New {rows}x{cols} game with {mines} mines (seed {seed})"),
        None => log::debug!("New {rows}x{cols} game with {mines} mines"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, GameError};

    fn first_safe(grid: &Grid) -> Position {
        grid.iter()
            .find(|(_, cell)| !cell.is_mine())
            .map(|(pos, _)| pos)
            .unwrap()
    }

    fn first_mine(grid: &Grid) -> Position {
        grid.iter()
            .find(|(_, cell)| cell.is_mine())
            .map(|(pos, _)| pos)
            .unwrap()
    }

    #[test]
    fn test_new_game_snapshot() {
        let game = Game::seeded(Difficulty::Intermediate.into(), 11).unwrap();
        let snapshot = game.snapshot();

        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.elapsed_seconds, 0);
        assert_eq!(snapshot.flags_remaining, 40);
        assert_eq!(snapshot.grid.dimensions(), (16, 16));
        assert_eq!(game.seed(), Some(11));
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Game::seeded(GameConfig::new(3, 3, 9), 1),
            Err(GameError::Configuration { .. })
        ));
    }

    #[test]
    fn test_failed_new_game_keeps_session() {
        let mut game = Game::seeded(GameConfig::new(5, 5, 3), 2).unwrap();
        game.tick();

        assert!(game.new_game(GameConfig::new(0, 5, 3)).is_err());
        assert_eq!(game.snapshot().elapsed_seconds, 1);
        assert_eq!(game.snapshot().grid.dimensions(), (5, 5));
    }

    #[test]
    fn test_new_game_replaces_session() {
        let mut game = Game::seeded(GameConfig::new(5, 5, 3), 2).unwrap();
        let mine = first_mine(game.snapshot().grid);
        game.reveal(mine).unwrap();
        game.tick();
        assert_eq!(game.state(), GameState::Lost);

        let snapshot = game.new_game(Difficulty::Expert.into()).unwrap();

        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.elapsed_seconds, 0);
        assert_eq!(snapshot.flags_remaining, 99);
        assert_eq!(snapshot.grid.dimensions(), (16, 30));
        assert_eq!(snapshot.grid.revealed_safe_count(), 0);
    }

    #[test]
    fn test_reveal_response() {
        let mut game = Game::seeded(GameConfig::new(8, 8, 10), 4).unwrap();
        let safe = first_safe(game.snapshot().grid);

        let response = game.reveal(safe).unwrap();

        assert!(!response.hit_mine());
        assert!(response.outcome.changed_cells.contains(&safe));
        assert!(response.snapshot.grid.get_cell(safe).unwrap().is_revealed());
    }

    #[test]
    fn test_flag_response() {
        let mut game = Game::seeded(GameConfig::new(8, 8, 10), 4).unwrap();
        let pos = Position::new(0, 0);

        let response = game.toggle_flag(pos).unwrap();
        assert!(response.flagged());
        assert_eq!(response.snapshot.flags_remaining, 9);

        let response = game.toggle_flag(pos).unwrap();
        assert!(!response.flagged());
        assert_eq!(response.snapshot.flags_remaining, 10);
    }

    #[test]
    fn test_from_grid() {
        let grid = Grid::from_mines(3, 3, &[Position::new(0, 0)]).unwrap();
        let mut game = Game::from_grid(grid);

        assert!(game.reveal(Position::new(0, 0)).unwrap().hit_mine());
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.tick(), 0);
    }
}
