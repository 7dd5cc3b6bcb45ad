//! Circular dominance rules for any odd number of moves.

use super::move_set::{Move, MoveSet};
use super::traits::GameJudge;
use crate::protocol::Outcome;
use std::cmp::Ordering;

/// Signed rotational distance from `subject` to `other` on a cycle of `n`
///
/// `((other - subject + half + n) mod n) - half`, in `[-half, half]` where
/// `half = n / 2`. Negative means `other` sits in the half `subject` beats.
pub fn circular_delta(n: usize, subject: usize, other: usize) -> isize {
    debug_assert!(subject < n && other < n);
    let half = n / 2;
    // `n - subject` keeps the sum non-negative without signed arithmetic
    let rotated = (other + n - subject + half) % n;
    rotated as isize - half as isize
}

/// Rule engine where each move beats the `n / 2` moves that precede it
/// cyclically and loses to the `n / 2` that follow it
#[derive(Clone, Debug)]
pub struct RuleEngine {
    moves: MoveSet,
}

impl RuleEngine {
    pub fn new(moves: MoveSet) -> Self {
        Self { moves }
    }

    /// Resolve by name, `None` if either name is not in the set
    pub fn resolve_names(&self, subject: &str, other: &str) -> Option<Outcome> {
        let subject = self.moves.find(subject)?;
        let other = self.moves.find(other)?;
        Some(self.resolve(subject, other))
    }
}

impl GameJudge for RuleEngine {
    fn moves(&self) -> &MoveSet {
        &self.moves
    }

    fn resolve(&self, subject: Move, other: Move) -> Outcome {
        match circular_delta(self.moves.len(), subject.index(), other.index()).cmp(&0) {
            Ordering::Equal => Outcome::Draw,
            Ordering::Less => Outcome::Win,
            Ordering::Greater => Outcome::Lose,
        }
    }
}
