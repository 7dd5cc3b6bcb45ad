//! Move sets and rule resolution.

mod matrix;
mod move_set;
mod rules;
mod traits;

pub use matrix::OutcomeMatrix;
pub use move_set::{Move, MoveSet, MoveSetError};
pub use rules::{circular_delta, RuleEngine};
pub use traits::GameJudge;
