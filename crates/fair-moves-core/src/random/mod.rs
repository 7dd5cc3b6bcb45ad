//! Secure randomness abstraction.
//!
//! The commitment draws its move and key through `RandomSource` so tests can
//! substitute a scripted source for the operating system's.

mod mock;
mod os;
mod traits;

pub use mock::MockRandomSource;
pub use os::OsRandomSource;
pub use traits::{EntropyError, RandomSource};
