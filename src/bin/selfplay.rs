//! Headless AI-vs-AI games.
//!
//! Runs a series of engine-vs-engine games and prints the tally. Set
//! `RUST_LOG=info` to follow every move.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use four_in_a_row::config::AppConfig;
use four_in_a_row::error::GameError;
use four_in_a_row::{AIEngine, AiPlayer, Cell, GameManager, GameOutcome};

/// Play the AI against itself.
#[derive(Parser, Debug)]
#[command(name = "selfplay", version, about)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "four_in_a_row.toml")]
    config: PathBuf,

    /// Override search depth for both sides
    #[arg(long)]
    depth: Option<u8>,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Split root columns across threads
    #[arg(long)]
    parallel: bool,
}

#[derive(Debug, Default)]
struct Tally {
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

fn play(config: &AppConfig) -> Result<(GameOutcome, usize), GameError> {
    let x = AiPlayer::new("engine-x", Cell::X, AIEngine::with_config(&config.engine));
    let o = AiPlayer::new("engine-o", Cell::O, AIEngine::with_config(&config.engine));
    let mut game = GameManager::with_size(config.game.rows, config.game.cols, Box::new(x), Box::new(o))?;
    let outcome = game.run()?;
    Ok((outcome, game.board().n_moves()))
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match AppConfig::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Apply CLI overrides
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if cli.parallel {
        config.engine.parallel_root = true;
    }
    if let Err(err) = config.validate() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    let mut tally = Tally::default();
    for game in 1..=cli.games {
        match play(&config) {
            Ok((outcome, moves)) => {
                println!("game {game}: {outcome} in {moves} moves");
                match outcome {
                    GameOutcome::Winner(Cell::X) => tally.x_wins += 1,
                    GameOutcome::Winner(_) => tally.o_wins += 1,
                    GameOutcome::Draw => tally.draws += 1,
                }
            }
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    println!(
        "X wins: {}, O wins: {}, draws: {}",
        tally.x_wins, tally.o_wins, tally.draws
    );
    ExitCode::SUCCESS
}
