//! Operating system random source.

use super::traits::{EntropyError, RandomSource};
use rand::rngs::OsRng;
use rand::RngCore;

/// Random source backed by the operating system CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandomSource;

impl RandomSource for OsRandomSource {
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| EntropyError::new(e.to_string()))
    }
}
