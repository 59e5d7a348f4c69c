//! Bogo sort: shuffle until sorted
//!
//! The joke algorithm of the trio. The iteration counter increments once
//! per shuffle attempt. Unbounded worst case; there is no timeout and no
//! cancellation, so only small arrays ever finish.

use crate::progress::SortProgress;
use crate::sorts::{is_sorted, lock, shuffle};
use std::sync::Mutex;

/// Shuffle-and-check until the array happens to be sorted.
///
/// The lock is taken per attempt, so the chart shows each candidate
/// permutation as it is tried.
pub fn bogo_sort(array: &Mutex<Vec<u32>>, progress: &SortProgress) {
    let mut rng = rand::rng();
    loop {
        progress.record();
        {
            let mut values = lock(array);
            if is_sorted(&values) {
                break;
            }
            shuffle(&mut values, &mut rng);
        }
        std::thread::yield_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::sequence;

    #[test]
    fn test_terminates_on_small_array() {
        // 5! = 120 permutations; this finishes in well under a second.
        let array = Mutex::new(vec![4, 0, 3, 1, 2]);
        let progress = SortProgress::new();
        progress.reset();
        bogo_sort(&array, &progress);
        assert_eq!(*array.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(progress.operations() >= 1);
    }

    #[test]
    fn test_sorted_input_needs_one_attempt() {
        let array = Mutex::new(sequence(6));
        let progress = SortProgress::new();
        progress.reset();
        bogo_sort(&array, &progress);
        assert_eq!(progress.operations(), 1);
        assert!(is_sorted(&array.lock().unwrap()));
    }
}
