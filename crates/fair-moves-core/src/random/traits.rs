//! Random source trait definition.

use thiserror::Error;

/// The secure random source could not produce bytes
#[derive(Clone, Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct EntropyError(String);

impl EntropyError {
    /// Create from a source-specific reason
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }
}

/// Trait for cryptographically secure randomness
///
/// Implementations can be:
/// - OsRandomSource for real games
/// - MockRandomSource for deterministic tests
pub trait RandomSource {
    /// Fill `dest` entirely with secure random bytes
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Produce `n` secure random bytes
    fn secure_bytes(&mut self, n: usize) -> Result<Vec<u8>, EntropyError> {
        let mut bytes = vec![0u8; n];
        self.fill_secure(&mut bytes)?;
        Ok(bytes)
    }

    /// Draw an index uniformly from `[0, n)`
    ///
    /// Uses rejection sampling over 64-bit draws, so there is no modulo bias
    /// for any `n`. Expected draws per call are below 2.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        sample_index(self, n)
    }
}

/// Rejection-sampled uniform index shared by all sources.
pub(crate) fn sample_index<R: RandomSource + ?Sized>(
    source: &mut R,
    n: usize,
) -> Result<usize, EntropyError> {
    assert!(n > 0, "cannot draw an index from an empty range");
    let bound = n as u64;

    // 2^64 mod bound: draws below this would over-represent the low indices.
    let threshold = bound.wrapping_neg() % bound;

    loop {
        let mut buf = [0u8; 8];
        source.fill_secure(&mut buf)?;
        let draw = u64::from_le_bytes(buf);
        if draw >= threshold {
            return Ok((draw % bound) as usize);
        }
    }
}
