mod logger;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use minesweeper_engine::{
    Cell, Difficulty, Game, GameConfig, GameError, GameState, Position, Snapshot,
};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(name = "minesweeper", about = "Terminal Minesweeper", version)]
struct Args {
    /// Preset board: beginner, intermediate or expert [default: beginner]
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
    /// Custom number of rows (requires --cols and --mines)
    #[arg(long, requires_all = ["cols", "mines"])]
    rows: Option<usize>,
    /// Custom number of columns
    #[arg(long, requires_all = ["rows", "mines"])]
    cols: Option<usize>,
    /// Custom number of mines
    #[arg(long, requires_all = ["rows", "cols"])]
    mines: Option<usize>,
    /// Seed for reproducible boards
    #[arg(long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

impl Args {
    fn config(&self) -> GameConfig {
        match (self.rows, self.cols, self.mines) {
            (Some(rows), Some(cols), Some(mines)) => GameConfig::new(rows, cols, mines),
            _ => self.difficulty.map(GameConfig::from).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Command {
    Reveal(Position),
    Flag(Position),
    NewGame,
    Help,
    Quit,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = logger::init_logger(args.verbose.log_level_filter()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    match run_game(&args) {
        Ok(_) => println!("Thanks for playing!"),
        Err(e) => eprintln!("Game error: {}", e),
    }
}

fn run_game(args: &Args) -> Result<(), GameError> {
    let config = args.config();
    let mut game = match args.seed {
        Some(seed) => Game::seeded(config, seed)?,
        None => Game::new(config)?,
    };
    if let Some(seed) = game.seed() {
        println!("Board seed: {}", seed);
    }
    print_help();

    let stdin = io::stdin();
    let mut clock = Instant::now();
    loop {
        let snapshot = game.snapshot();
        print_board(&snapshot);
        announce_result(&snapshot);
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            log::warn!("Failed to flush stdout: {e}");
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return Ok(()),
            Ok(_) => {}
        }
        drive_clock(&mut game, &mut clock);

        let Some(command) = parse_command(&input) else {
            println!("Unrecognized command, type 'h' for help");
            continue;
        };

        let result = match command {
            Command::Reveal(pos) => game.reveal(pos).map(|_| ()),
            Command::Flag(pos) => game.toggle_flag(pos).map(|_| ()),
            Command::NewGame => {
                clock = Instant::now();
                game.new_game(config).map(|_| ())
            }
            Command::Help => {
                print_help();
                Ok(())
            }
            Command::Quit => return Ok(()),
        };

        match result {
            Err(e @ GameError::OutOfRange { .. }) => println!("Error: {}", e),
            Err(e) => return Err(e),
            Ok(()) => {}
        }
    }
}

/// Converts wall-clock time since the last tick into whole-second ticks.
fn drive_clock(game: &mut Game, clock: &mut Instant) {
    let whole_seconds = clock.elapsed().as_secs();
    for _ in 0..whole_seconds {
        game.tick();
    }
    *clock += Duration::from_secs(whole_seconds);
}

fn announce_result(snapshot: &Snapshot) {
    match snapshot.state {
        GameState::Won => {
            println!("Congratulations! You won in {}s!", snapshot.elapsed_seconds);
            println!("Type 'n' for a new game or 'q' to quit.");
        }
        GameState::Lost => {
            println!("Game Over!");
            println!("Type 'n' for a new game or 'q' to quit.");
        }
        GameState::Playing => {}
    }
}

fn parse_command(input: &str) -> Option<Command> {
    let mut parts = input.split_whitespace();
    let command = match parts.next()?.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Command::Reveal(parse_position(&mut parts)?),
        "f" | "flag" => Command::Flag(parse_position(&mut parts)?),
        "n" | "new" => Command::NewGame,
        "h" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    parts.next().is_none().then_some(command)
}

fn parse_position<'a>(parts: &mut impl Iterator<Item = &'a str>) -> Option<Position> {
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some(Position::new(row, col))
}

fn print_help() {
    println!("Commands:");
    println!("  r <row> <col>  - reveal a cell (0-based)");
    println!("  f <row> <col>  - toggle a flag");
    println!("  n              - new game");
    println!("  h              - show this help");
    println!("  q              - quit");
}

fn print_board(snapshot: &Snapshot) {
    let grid = snapshot.grid;
    let (rows, cols) = grid.dimensions();

    println!(
        "Mines left: {}  Time: {}s",
        snapshot.flags_remaining, snapshot.elapsed_seconds
    );

    // Column numbers
    print!("   ");
    for col in 0..cols {
        print!("{:>3}", col);
    }
    println!();

    for row in 0..rows {
        print!("{:>3}", row);
        for col in 0..cols {
            match grid.get_cell(Position::new(row, col)) {
                Ok(cell) => print!("{:>3}", cell_symbol(cell)),
                Err(_) => print!("{:>3}", "?"),
            }
        }
        println!();
    }
}

fn cell_symbol(cell: &Cell) -> String {
    match (cell.is_revealed(), cell.is_flagged(), cell.is_mine()) {
        (false, true, _) => "⚑".to_string(),
        (false, false, _) => "□".to_string(),
        // Flags still standing after the game ended
        (true, true, true) => "⚑".to_string(),
        (true, true, false) => "✗".to_string(),
        (true, false, true) => "*".to_string(),
        (true, false, false) => match cell.neighbor_mine_count() {
            0 => " ".to_string(),
            n => n.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("r 2 3\n"),
            Some(Command::Reveal(Position::new(2, 3)))
        );
        assert_eq!(
            parse_command("FLAG 0 7"),
            Some(Command::Flag(Position::new(0, 7)))
        );
        assert_eq!(parse_command("n"), Some(Command::NewGame));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("r 2"), None);
        assert_eq!(parse_command("r -1 2"), None);
        assert_eq!(parse_command("r 1 2 3"), None);
        assert_eq!(parse_command("x"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_custom_config_overrides_difficulty() {
        let args = Args::parse_from(["minesweeper", "--rows", "5", "--cols", "6", "--mines", "7"]);
        assert_eq!(args.config(), GameConfig::new(5, 6, 7));

        let args = Args::parse_from(["minesweeper", "-d", "expert"]);
        assert_eq!(args.config(), Difficulty::Expert.config());

        let args = Args::parse_from(["minesweeper"]);
        assert_eq!(args.config(), GameConfig::default());
    }
}
