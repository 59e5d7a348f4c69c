//! LSD radix sort over decimal digits
//!
//! One stable counting-sort pass per digit, lowest digit first. The
//! operation counter increments per counting-sort operation (occurrence
//! count, prefix sum, output placement, copy-back) and per comparison in
//! the initial max scan.

use crate::progress::SortProgress;
use crate::sorts::lock;
use std::sync::Mutex;

/// Sort the guarded array in place.
///
/// The lock is held for one whole digit pass at a time; between passes
/// the render loop can observe the array sorted by the digits processed
/// so far.
pub fn radix_sort(array: &Mutex<Vec<u32>>, progress: &SortProgress) {
    let max = {
        let values = lock(array);
        match max_value(&values, progress) {
            Some(max) => max,
            None => return,
        }
    };

    let mut exp: u64 = 1;
    while u64::from(max) / exp > 0 {
        {
            let mut values = lock(array);
            counting_pass(&mut values, exp, progress);
        }
        std::thread::yield_now();
        exp *= 10;
    }
}

/// Max scan to find the number of digit passes needed
fn max_value(values: &[u32], progress: &SortProgress) -> Option<u32> {
    let (&first, rest) = values.split_first()?;
    let mut max = first;
    for &v in rest {
        if v > max {
            max = v;
        }
        progress.record();
    }
    Some(max)
}

/// Stable counting sort of `values` by the decimal digit selected by `exp`
fn counting_pass(values: &mut [u32], exp: u64, progress: &SortProgress) {
    let digit = |v: u32| (u64::from(v) / exp % 10) as usize;

    let mut count = [0usize; 10];
    for &v in values.iter() {
        count[digit(v)] += 1;
        progress.record();
    }

    // Turn counts into end positions.
    for d in 1..10 {
        count[d] += count[d - 1];
        progress.record();
    }

    // Walk backwards so equal digits keep their order.
    let mut output = vec![0u32; values.len()];
    for &v in values.iter().rev() {
        let d = digit(v);
        count[d] -= 1;
        output[count[d]] = v;
        progress.record();
    }

    values.copy_from_slice(&output);
    progress.record_many(values.len() as u64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{is_sorted, sequence, shuffle};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sorts_fixed_example() {
        let array = Mutex::new(vec![4, 0, 3, 1, 2]);
        let progress = SortProgress::new();
        progress.reset();
        radix_sort(&array, &progress);
        assert_eq!(*array.lock().unwrap(), vec![0, 1, 2, 3, 4]);
        assert!(progress.operations() > 0);
    }

    #[test]
    fn test_sorts_shuffled_thousand() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut values = sequence(1000);
        shuffle(&mut values, &mut rng);

        let array = Mutex::new(values);
        let progress = SortProgress::new();
        progress.reset();
        radix_sort(&array, &progress);
        assert!(is_sorted(&array.lock().unwrap()));
    }

    #[test]
    fn test_stability_across_digit_boundary() {
        // 4 digits vs 1 digit exercises multiple passes.
        let array = Mutex::new(vec![3, 1000, 2, 999, 0, 1, 4, 5, 6, 7, 8, 9, 10]);
        let progress = SortProgress::new();
        progress.reset();
        radix_sort(&array, &progress);
        assert_eq!(
            *array.lock().unwrap(),
            vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 999, 1000]
        );
    }

    #[test]
    fn test_empty_and_all_zero() {
        let progress = SortProgress::new();
        progress.reset();

        let empty = Mutex::new(Vec::new());
        radix_sort(&empty, &progress);
        assert!(empty.lock().unwrap().is_empty());

        // max == 0 means no digit passes at all
        let zeros = Mutex::new(vec![0, 0, 0]);
        radix_sort(&zeros, &progress);
        assert_eq!(*zeros.lock().unwrap(), vec![0, 0, 0]);
    }
}
