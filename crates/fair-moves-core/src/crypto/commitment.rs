//! Commitment and Reveal for the commit-reveal scheme.

use super::key::HmacKey;
use super::tag::Tag;
use crate::games::{Move, MoveSet};
use crate::random::{EntropyError, RandomSource};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Draw the computer's move uniformly from `moves`
pub fn select_move<R: RandomSource + ?Sized>(
    moves: &MoveSet,
    source: &mut R,
) -> Result<Move, EntropyError> {
    let index = source.uniform_index(moves.len())?;
    Ok(Move::new(index))
}

/// Tag = HMAC-SHA256(key, move name)
pub fn compute_tag(key: &HmacKey, move_name: &str) -> Tag {
    Tag::compute(key, move_name.as_bytes())
}

/// Check a revealed key and move name against a published tag
pub fn verify_tag(key: &HmacKey, move_name: &str, tag: &Tag) -> bool {
    tag.verify(key, move_name.as_bytes())
}

/// The computer's hidden move, bound by a published tag
///
/// Only the tag is public. Key and move are disclosed through the session
/// once the counterparty's move is fixed.
#[derive(Clone)]
pub struct Commitment {
    key: HmacKey,
    committed: Move,
    tag: Tag,
}

impl Commitment {
    /// Pick a move and a fresh key, then bind them
    pub fn commit<R: RandomSource + ?Sized>(
        moves: &MoveSet,
        source: &mut R,
    ) -> Result<Self, EntropyError> {
        let key = HmacKey::generate(source)?;
        let committed = select_move(moves, source)?;
        let tag = compute_tag(&key, moves.name(committed));
        Ok(Self {
            key,
            committed,
            tag,
        })
    }

    /// The publishable tag
    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub(crate) fn committed_move(&self) -> Move {
        self.committed
    }

    /// Disclose key and move. Callers must only do this after the
    /// counterparty's move is fixed.
    pub(crate) fn reveal(&self, moves: &MoveSet) -> Reveal {
        Reveal {
            key: self.key.clone(),
            move_name: moves.name(self.committed).to_string(),
        }
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", self.tag)
    }
}

/// Disclosed key and move, enough for anyone to recompute the tag
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reveal {
    pub key: HmacKey,
    pub move_name: String,
}

impl Reveal {
    /// Check this reveal against the tag published at commit time
    pub fn verify(&self, tag: &Tag) -> bool {
        verify_tag(&self.key, &self.move_name, tag)
    }
}
