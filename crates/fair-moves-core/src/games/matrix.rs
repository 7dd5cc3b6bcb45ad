//! Full outcome table for a move set.

use crate::protocol::Outcome;
use serde::{Deserialize, Serialize};

/// N×N outcomes, rows and columns labeled by move name in set order
///
/// Cell `(row, col)` is the outcome for the row move played against the
/// column move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeMatrix {
    labels: Vec<String>,
    cells: Vec<Outcome>,
}

impl OutcomeMatrix {
    pub(crate) fn new(labels: Vec<String>, cells: Vec<Outcome>) -> Self {
        debug_assert_eq!(cells.len(), labels.len() * labels.len());
        Self { labels, cells }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Move names in set order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Outcome for `row` against `col`
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn outcome(&self, row: usize, col: usize) -> Outcome {
        assert!(row < self.size() && col < self.size(), "matrix index out of range");
        self.cells[row * self.size() + col]
    }

    /// Rows with their label
    pub fn rows(&self) -> impl Iterator<Item = (&str, &[Outcome])> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.cells.chunks(self.labels.len()))
    }
}
