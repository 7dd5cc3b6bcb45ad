//! Game judging trait.

use super::matrix::OutcomeMatrix;
use super::move_set::{Move, MoveSet};
use crate::protocol::Outcome;

/// Trait for rule sets that decide an outcome between two moves
pub trait GameJudge {
    /// The moves this judge rules over
    fn moves(&self) -> &MoveSet;

    /// Outcome for `subject` played against `other`
    fn resolve(&self, subject: Move, other: Move) -> Outcome;

    /// Every pairing, with the row move as subject
    fn outcome_matrix(&self) -> OutcomeMatrix {
        let n = self.moves().len();
        let cells = (0..n)
            .flat_map(|row| (0..n).map(move |col| (row, col)))
            .map(|(row, col)| self.resolve(Move::new(row), Move::new(col)))
            .collect();
        OutcomeMatrix::new(self.moves().names().to_vec(), cells)
    }
}
