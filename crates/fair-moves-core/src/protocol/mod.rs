//! Session types and the commit-resolve-reveal lifecycle.

mod session;
mod types;

pub use session::{GameSession, SessionRecord};
pub use types::{Outcome, SessionId, SessionPhase};
