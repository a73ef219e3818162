use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest value produced by [`SortableSequence::random`].
pub const MIN_RANDOM_VALUE: u32 = 5;
/// Exclusive upper bound of values produced by [`SortableSequence::random`].
pub const MAX_RANDOM_VALUE: u32 = 95;

/// Array of bar values driven by the sort state machines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortableSequence {
    values: Vec<u32>,
}

impl SortableSequence {
    #[must_use]
    pub fn from_values(values: Vec<u32>) -> Self {
        Self { values }
    }

    pub fn random<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let values = (0..len)
            .map(|_| rng.gen_range(MIN_RANDOM_VALUE..MAX_RANDOM_VALUE))
            .collect();

        Self { values }
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> u32 {
        self.values[index]
    }

    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: u32) {
        self.values[index] = value;
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Non-decreasing check used to refuse re-running a finished sort.
    ///
    /// An empty sequence is reported as unsorted so the controls stay enabled
    /// until values have been generated.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        !self.values.is_empty() && self.values.windows(2).all(|pair| pair[1] >= pair[0])
    }
}
