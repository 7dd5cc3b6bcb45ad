//! Mock random source for testing.

use super::traits::{sample_index, EntropyError, RandomSource};
use std::collections::VecDeque;

/// Deterministic random source for tests
///
/// Bytes come from a wrapping counter. Queued indices are returned by
/// `uniform_index` in order; once the queue is empty it falls back to
/// sampling the counter bytes.
#[derive(Clone, Debug, Default)]
pub struct MockRandomSource {
    counter: u8,
    indices: VecDeque<usize>,
    failing: bool,
    bytes_drawn: usize,
}

impl MockRandomSource {
    /// Create a source with no queued indices
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that answers `uniform_index` from `indices` first
    pub fn with_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            indices: indices.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Create a source whose every call fails, simulating a missing entropy device
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Total bytes handed out so far (for testing)
    pub fn bytes_drawn(&self) -> usize {
        self.bytes_drawn
    }
}

impl RandomSource for MockRandomSource {
    fn fill_secure(&mut self, dest: &mut [u8]) -> Result<(), EntropyError> {
        if self.failing {
            return Err(EntropyError::new("mock source configured to fail"));
        }
        for byte in dest.iter_mut() {
            *byte = self.counter;
            self.counter = self.counter.wrapping_add(1);
        }
        self.bytes_drawn += dest.len();
        Ok(())
    }

    fn uniform_index(&mut self, n: usize) -> Result<usize, EntropyError> {
        if self.failing {
            return Err(EntropyError::new("mock source configured to fail"));
        }
        match self.indices.pop_front() {
            Some(index) => {
                assert!(index < n, "queued index {index} out of range for {n} moves");
                Ok(index)
            }
            None => sample_index(self, n),
        }
    }
}
