//! Error type for game sessions.

use crate::games::MoveSetError;
use crate::random::EntropyError;
use thiserror::Error;

/// Errors from game session operations
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid move set: {0}")]
    InvalidMoveSet(#[from] MoveSetError),

    #[error("unknown move: {0:?}")]
    UnknownMove(String),

    #[error("outcome not yet resolved: submit the counterparty move first")]
    NotYetResolved,

    #[error("counterparty move already submitted")]
    AlreadyResolved,

    #[error(transparent)]
    EntropyUnavailable(#[from] EntropyError),
}
