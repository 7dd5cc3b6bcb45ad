//! Interactive play loop and reveal verification.

use crate::config::CliConfig;
use crate::menu::{parse_choice, render_menu, MenuChoice};
use crate::table::render_help;
use fair_moves_core::crypto::{verify_tag, HexParseError};
use fair_moves_core::{GameError, GameSession, HmacKey, Tag};
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Application error type
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error("invalid hex argument: {0}")]
    Hex(#[from] HexParseError),

    #[error("usage: fair-moves --verify <key-hex> <move> <hmac-hex>")]
    VerifyUsage,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run one game over `input`/`out` until the player moves or leaves
pub fn play<R: BufRead, W: Write>(
    session: &mut GameSession,
    config: &CliConfig,
    mut input: R,
    out: &mut W,
) -> Result<(), CliError> {
    info!(session = %session.id(), moves = session.moves().len(), "session committed");

    writeln!(out, "HMAC: {}", session.commitment_tag())?;
    write!(out, "{}", render_menu(session.moves()))?;
    out.flush()?;

    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!(session = %session.id(), "input closed");
            writeln!(out, "Exiting the game...")?;
            return Ok(());
        }

        match parse_choice(&line, session.moves().len()) {
            MenuChoice::Help => {
                write!(out, "{}", render_help(&session.outcome_matrix()))?;
                write!(out, "{}", render_menu(session.moves()))?;
            }
            MenuChoice::Exit => {
                writeln!(out, "Exiting the game...")?;
                return Ok(());
            }
            MenuChoice::Play(index) => {
                let name = session.moves().names()[index].clone();
                return finish(session, config, &name, out);
            }
            MenuChoice::Invalid => {
                debug!(input = line.trim(), "rejected menu input");
                writeln!(out, "Invalid input, please try again.")?;
                write!(out, "{}", render_menu(session.moves()))?;
            }
        }
        out.flush()?;
    }
}

fn finish<W: Write>(
    session: &mut GameSession,
    config: &CliConfig,
    player_move: &str,
    out: &mut W,
) -> Result<(), CliError> {
    let outcome = session.submit_counterparty_move(player_move)?;
    let record = session.close()?;
    info!(session = %record.session_id, %outcome, "session resolved");

    writeln!(out, "Your move: {}", record.counterparty_move)?;
    writeln!(out, "Computer move: {}", record.reveal.move_name)?;
    writeln!(out, "{}", outcome.message())?;
    writeln!(out, "HMAC key: {}", record.reveal.key.to_hex())?;
    if config.self_verify {
        if record.verify() {
            writeln!(out, "HMAC check: ok")?;
        } else {
            warn!(session = %record.session_id, "revealed key does not match published HMAC");
            writeln!(out, "HMAC check: FAILED")?;
        }
    }
    writeln!(out, "Finish")?;
    out.flush()?;
    Ok(())
}

/// Check `<key-hex> <move> <hmac-hex>`; `Ok(false)` on a mismatch
pub fn verify<W: Write>(args: &[String], out: &mut W) -> Result<bool, CliError> {
    let [key, move_name, tag] = args else {
        return Err(CliError::VerifyUsage);
    };
    let key: HmacKey = key.parse()?;
    let tag: Tag = tag.parse()?;

    let matches = verify_tag(&key, move_name, &tag);
    debug!(%tag, move_name = move_name.as_str(), matches, "verified reveal");
    if matches {
        writeln!(out, "HMAC verified")?;
    } else {
        writeln!(out, "HMAC mismatch")?;
    }
    Ok(matches)
}
