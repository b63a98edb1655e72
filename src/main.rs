//! Go-Referee command-line front end.
//!
//! ## Usage
//!
//! - `go-referee` - Replay the capture demo
//! - `go-referee play` - Play a game by typing commands on stdin
//! - `go-referee random --seed 7` - Play a random game and print the result
//!
//! Set `RUST_LOG=debug` to trace accepted and rejected moves on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use go_referee::console::Session;
use go_referee::constants::{DEFAULT_BOARD_SIZE, DEFAULT_RANDOM_MOVES, DEMO_BOARD_SIZE};
use go_referee::game::Game;
use go_referee::playout::random_game;

/// Go-Referee: a rules engine for two-player Go
#[derive(Parser)]
#[command(name = "go-referee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (NxN)
    #[arg(long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    size: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a short game that ends in a capture
    Demo,
    /// Read play commands from stdin and answer on stdout
    Play {
        /// Identifier of the first player (black)
        #[arg(long, default_value = "black")]
        black: String,
        /// Identifier of the second player (white)
        #[arg(long, default_value = "white")]
        white: String,
    },
    /// Play random legal moves and print the final board
    Random {
        /// Random seed
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Maximum number of moves
        #[arg(long, default_value_t = DEFAULT_RANDOM_MOVES)]
        moves: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { black, white }) => {
            let game = Game::new(1, black, white, cli.size).context("cannot start game")?;
            let mut session = Session::new(game);
            session
                .run(io::stdin().lock(), io::stdout().lock())
                .context("console session failed")?;
        }
        Some(Commands::Random { seed, moves }) => run_random(cli.size, seed, moves)?,
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Go-Referee: capture demo on {DEMO_BOARD_SIZE}x{DEMO_BOARD_SIZE}\n");

    let mut game = Game::new(1, "black", "white", DEMO_BOARD_SIZE)?;
    let opening = [
        (3, 4),
        (11, 10),
        (4, 4),
        (3, 3),
        (4, 10),
        (4, 3),
        (4, 9),
        (5, 4),
        (5, 10),
        (4, 5),
        (6, 10),
        (3, 5),
        (6, 11),
    ];
    for (x, y) in opening {
        game.play_next(x, y)
            .with_context(|| format!("demo move ({x},{y}) rejected"))?;
    }
    println!("{}", game.board());

    let outcome = game.play_next(2, 4).context("capturing move rejected")?;
    println!("White plays (2,4) and captures {} stones:\n", outcome.captured.len());
    println!("{}", game.board());
    Ok(())
}

fn run_random(size: u8, seed: u64, moves: usize) -> Result<()> {
    let mut game = Game::new(1, "black", "white", size)?;
    let mut rng = fastrand::Rng::with_seed(seed);
    let stats = random_game(&mut game, &mut rng, moves);

    println!("{}", game.board());
    println!(
        "moves: {}  captured: {}  rejected: {}",
        stats.moves, stats.captured, stats.rejected
    );
    Ok(())
}
