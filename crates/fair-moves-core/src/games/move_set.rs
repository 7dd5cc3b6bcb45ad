//! Validated, ordered move names.

use std::collections::HashSet;
use thiserror::Error;

/// Reasons a list of move names cannot form a game
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveSetError {
    #[error("at least 3 moves are required, got {count}")]
    TooFewMoves { count: usize },

    #[error("the number of moves must be odd, got {count}")]
    EvenMoveCount { count: usize },

    #[error("moves must be unique, {0:?} is repeated")]
    DuplicateMove(String),
}

/// A move, identified by its index in the owning `MoveSet`
///
/// Only meaningful together with the set that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(usize);

impl Move {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the owning set
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered, distinct move names with odd length of at least three
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveSet {
    names: Vec<String>,
}

impl MoveSet {
    /// Smallest playable set
    pub const MIN_MOVES: usize = 3;

    /// Validate and build a move set. Names are compared exactly, so
    /// `"Rock"` and `"rock"` are distinct moves.
    pub fn new<I, S>(names: I) -> Result<Self, MoveSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let count = names.len();

        if count < Self::MIN_MOVES {
            return Err(MoveSetError::TooFewMoves { count });
        }
        if count % 2 == 0 {
            return Err(MoveSetError::EvenMoveCount { count });
        }

        let mut seen = HashSet::with_capacity(count);
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(MoveSetError::DuplicateMove(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Number of moves (always odd, at least three)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All names in canonical order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Name of a move
    ///
    /// # Panics
    ///
    /// Panics if `mv` came from a larger set.
    pub fn name(&self, mv: Move) -> &str {
        &self.names[mv.0]
    }

    /// Look up a move by exact name
    pub fn find(&self, name: &str) -> Option<Move> {
        self.names.iter().position(|n| n == name).map(Move)
    }

    /// Move at `index`, if in range
    pub fn get(&self, index: usize) -> Option<Move> {
        (index < self.names.len()).then_some(Move(index))
    }

    /// Iterate moves with their names in order
    pub fn iter(&self) -> impl Iterator<Item = (Move, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Move(i), name.as_str()))
    }
}
