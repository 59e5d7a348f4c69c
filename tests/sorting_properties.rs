//! Property tests for the sorting algorithms
//!
//! Shell and radix sort must map every permutation of `0..n` back to the
//! identity; bogo sort must do the same for small arrays within a time
//! budget.

mod common;

use common::{assert_fully_sorted, shuffled_sequence};
use proptest::prelude::*;
use sortik::progress::SortProgress;
use sortik::sorts::{bogo_sort, is_sorted, radix_sort, sequence, shell_sort};
use std::sync::Mutex;
use std::time::{Duration, Instant};

proptest! {
    #[test]
    fn shell_sort_restores_identity(n in 2usize..300, seed in any::<u64>()) {
        let array = Mutex::new(shuffled_sequence(n, seed));
        let progress = SortProgress::new();
        progress.reset();
        shell_sort(&array, &progress);
        prop_assert!(is_sorted(&array.lock().unwrap()));
    }

    #[test]
    fn radix_sort_restores_identity(n in 2usize..300, seed in any::<u64>()) {
        let array = Mutex::new(shuffled_sequence(n, seed));
        let progress = SortProgress::new();
        progress.reset();
        radix_sort(&array, &progress);
        prop_assert!(is_sorted(&array.lock().unwrap()));
    }

    #[test]
    fn both_sorts_agree_on_the_same_input(n in 2usize..200, seed in any::<u64>()) {
        let input = shuffled_sequence(n, seed);
        let progress = SortProgress::new();
        progress.reset();

        let by_shell = Mutex::new(input.clone());
        shell_sort(&by_shell, &progress);
        let by_radix = Mutex::new(input);
        radix_sort(&by_radix, &progress);

        prop_assert_eq!(&*by_shell.lock().unwrap(), &*by_radix.lock().unwrap());
    }
}

#[test]
fn bogo_sort_terminates_on_tiny_arrays() {
    // n! <= 720, so each run finishes quickly; budget is generous anyway.
    let budget = Duration::from_secs(60);
    let start = Instant::now();
    for seed in 0..5 {
        let array = Mutex::new(shuffled_sequence(6, seed));
        let progress = SortProgress::new();
        progress.reset();
        bogo_sort(&array, &progress);
        assert_fully_sorted(&array.lock().unwrap());
        assert!(progress.operations() >= 1);
        assert!(start.elapsed() < budget, "bogo sort blew the time budget");
    }
}

#[test]
fn fixed_five_element_example() {
    let input = vec![4, 0, 3, 1, 2];
    let progress = SortProgress::new();
    progress.reset();

    let by_shell = Mutex::new(input.clone());
    shell_sort(&by_shell, &progress);
    assert_eq!(*by_shell.lock().unwrap(), vec![0, 1, 2, 3, 4]);

    let by_radix = Mutex::new(input);
    radix_sort(&by_radix, &progress);
    assert_eq!(*by_radix.lock().unwrap(), vec![0, 1, 2, 3, 4]);
}

#[test]
fn fresh_shuffle_fails_sorted_check() {
    // 1/n! odds of a sorted shuffle; three tries make a flake impossible
    // in practice.
    let unsorted = (0..3).any(|seed| !is_sorted(&shuffled_sequence(100, seed)));
    assert!(unsorted);
}

#[test]
fn seeded_array_is_identity() {
    assert_fully_sorted(&sequence(1000));
}
