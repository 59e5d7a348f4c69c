//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

use rand::rngs::StdRng;
use rand::SeedableRng;
use sortik::sorts::{sequence, shuffle};

/// Build a deterministically shuffled permutation of `0..n`
pub fn shuffled_sequence(n: usize, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values = sequence(n);
    shuffle(&mut values, &mut rng);
    values
}

/// Assert `values` equals `0, 1, ..., n-1`
pub fn assert_fully_sorted(values: &[u32]) {
    assert!(
        sortik::sorts::is_sorted(values),
        "array of length {} is not the identity permutation",
        values.len()
    );
}
