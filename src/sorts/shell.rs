//! Shell sort: gapped insertion sort with the `n/2, n/4, ..., 1` sequence
//!
//! The operation counter increments once per element shift and once per
//! final placement of the held element.

use crate::progress::SortProgress;
use crate::sorts::lock;
use std::sync::Mutex;

/// Sort the guarded array in place.
///
/// The lock is taken per element insertion, so the render loop can
/// observe the array mid-pass.
pub fn shell_sort(array: &Mutex<Vec<u32>>, progress: &SortProgress) {
    let n = lock(array).len();

    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut values = lock(array);

            // Hold values[i] and shift earlier gap-sorted elements up
            // until its slot is found.
            let temp = values[i];
            let mut j = i;
            while j >= gap && values[j - gap] > temp {
                values[j] = values[j - gap];
                progress.record();
                j -= gap;
            }
            values[j] = temp;
            progress.record();

            drop(values);
            std::thread::yield_now();
        }
        gap /= 2;
    }
}
