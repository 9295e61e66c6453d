//! Capture-Go: a Go rules engine scored by captures.
//!
//! ## Usage
//!
//! - `capture-go` - Play a random demo game
//! - `capture-go gtp` - Start a GTP server for GUI integration
//! - `capture-go --size 9 demo --seed 7` - Seeded demo on a 9x9 board
//!
//! Set `RUST_LOG=debug` to see captures and rejected moves on stderr.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use capture_go::board::{Color, format_vertex};
use capture_go::config::GameConfig;
use capture_go::constants::{DEFAULT_BOARD_SIZE, DEMO_MOVES, DEMO_PASS_PROB};
use capture_go::game::{GameSession, MoveError};
use capture_go::gtp::{GtpEngine, format_score};

/// Capture-Go: a Go rules engine scored by captured stones
#[derive(Parser)]
#[command(name = "capture-go")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Board size (2-25)
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP (Go Text Protocol) server for use with GUI applications
    Gtp,
    /// Play random points through the rules engine and print the result
    Demo {
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Number of moves to attempt before both players pass
        #[arg(long, default_value_t = DEMO_MOVES)]
        moves: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let session = GameSession::with_config(GameConfig::with_board_size(cli.size))
        .context("invalid game configuration")?;

    match cli.command {
        Some(Commands::Gtp) => GtpEngine::new(session).run_stdio(),
        Some(Commands::Demo { seed, moves }) => {
            run_demo(session, seed, moves);
            Ok(())
        }
        None => {
            run_demo(session, None, DEMO_MOVES);
            Ok(())
        }
    }
}

fn run_demo(mut game: GameSession, seed: Option<u64>, moves: usize) {
    println!("Capture-Go: random demo game\n");

    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let size = game.board().size();

    let mut suicides = 0;
    for _ in 0..moves {
        if game.is_ended() {
            break;
        }
        if rng.f64() < DEMO_PASS_PROB {
            game.pass();
            continue;
        }
        let (x, y) = (rng.usize(..size), rng.usize(..size));
        match game.attempt_move(x, y) {
            Ok(placed) if placed.captured > 0 => println!(
                "{} {} captures {}",
                placed.player,
                format_vertex(placed.point, size),
                placed.captured
            ),
            Ok(_) | Err(MoveError::Occupied) => {}
            Err(MoveError::Suicide) => suicides += 1,
            Err(err) => println!("unexpected rejection: {err}"),
        }
    }

    let outcome = game.pass();
    let score = match outcome.final_score {
        Some(score) => score,
        None => game.pass().final_score.unwrap_or_else(|| game.resign()),
    };

    println!("\n{}", game.board());
    println!(
        "Captures: Black {}  White {}",
        game.captures(Color::Black),
        game.captures(Color::White)
    );
    println!("Suicide attempts skipped: {suicides}");
    println!("Result: {}", format_score(&score));
}
