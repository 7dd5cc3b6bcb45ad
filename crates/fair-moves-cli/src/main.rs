//! Fair Moves console game
//!
//! `fair-moves Rock Paper Scissors` plays one game: the computer publishes an
//! HMAC of its move, the player picks from the menu, and the HMAC key is
//! revealed with the result. `fair-moves --verify <key> <move> <hmac>` checks
//! a revealed key afterwards.

mod config;
mod game;
mod menu;
mod table;

use config::CliConfig;
use fair_moves_core::{GameError, GameSession};
use game::CliError;
use std::io;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const USAGE_EXAMPLE: &str = "\
Provide an odd number (at least 3) of distinct moves, for example:
  fair-moves Rock Paper Scissors
  fair-moves Rock Paper Scissors Lizard Spock";

fn init_tracing(config: &CliConfig) {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
}

fn run(args: Vec<String>, config: &CliConfig) -> Result<ExitCode, CliError> {
    if args.first().map(String::as_str) == Some("--verify") {
        let verified = game::verify(&args[1..], &mut io::stdout().lock())?;
        return Ok(if verified {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut session = GameSession::new(args)?;
    game::play(
        &mut session,
        config,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let config = CliConfig::from_env();
    init_tracing(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(args, &config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {}", err);
            match err {
                CliError::Game(GameError::InvalidMoveSet(_)) => eprintln!("{}", USAGE_EXAMPLE),
                CliError::Game(GameError::EntropyUnavailable(_)) => {
                    error!("secure random source unavailable, aborting session")
                }
                _ => {}
            }
            ExitCode::FAILURE
        }
    }
}
