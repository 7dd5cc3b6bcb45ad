//! Fair Moves Core Library
//!
//! Provably fair N-move games (rock-paper-scissors generalized to any odd
//! number of moves). The computer commits to its move with an HMAC before
//! the player chooses and reveals the key afterwards, and a circular rule
//! decides every pairing so that no move dominates.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;
pub mod random;

pub use crypto::{compute_tag, verify_tag, Commitment, HmacKey, Reveal, Tag};
pub use error::GameError;
pub use games::{GameJudge, Move, MoveSet, MoveSetError, OutcomeMatrix, RuleEngine};
pub use protocol::{GameSession, Outcome, SessionId, SessionPhase, SessionRecord};
pub use random::{EntropyError, MockRandomSource, OsRandomSource, RandomSource};
