//! Sorting algorithms and array helpers
//!
//! Each algorithm sorts a mutex-guarded array in place, taking the lock
//! per step (an insertion for shell sort, a digit pass for radix sort, a
//! shuffle attempt for bogo sort) and yielding between steps. The render
//! loop snapshots the array between steps, so partially-sorted
//! intermediate states are visible on the chart while a run is in flight.
//!
//! Work is reported through a [`SortProgress`](crate::progress::SortProgress)
//! handle; each algorithm documents what its counter counts.

pub mod bogo;
pub mod radix;
pub mod shell;

pub use bogo::bogo_sort;
pub use radix::radix_sort;
pub use shell::shell_sort;

use rand::Rng;
use std::sync::{Mutex, MutexGuard};

/// Lock a guarded array, shrugging off poisoning.
///
/// A poisoned lock only means a sort thread panicked; the values are
/// still safe to read and display.
pub(crate) fn lock(array: &Mutex<Vec<u32>>) -> MutexGuard<'_, Vec<u32>> {
    array.lock().unwrap_or_else(|e| e.into_inner())
}

/// Build the seeded array `0..n`
pub fn sequence(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}

/// Fisher-Yates shuffle
pub fn shuffle(values: &mut [u32], rng: &mut impl Rng) {
    for i in (1..values.len()).rev() {
        let j = rng.random_range(0..=i);
        values.swap(i, j);
    }
}

/// Check the sorted invariant: `values[i] == i` for every index
pub fn is_sorted(values: &[u32]) -> bool {
    values.iter().enumerate().all(|(i, &v)| v == i as u32)
}
