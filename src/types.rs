//! Core types shared between the runners and the frontend

use serde::{Deserialize, Serialize};

/// Smallest selectable array length
pub const MIN_ARRAY_LEN: usize = 100;

/// Largest selectable array length
pub const MAX_ARRAY_LEN: usize = 10_000;

/// Array length used on first launch
pub const DEFAULT_ARRAY_LEN: usize = 1_000;

/// The sorting algorithms the visualizer can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortAlgorithm {
    Shell,
    Radix,
    Bogo,
}

impl SortAlgorithm {
    /// All algorithms, in display order
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Shell,
        SortAlgorithm::Radix,
        SortAlgorithm::Bogo,
    ];

    /// Human-readable name used in headings and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            SortAlgorithm::Shell => "Shell Sort",
            SortAlgorithm::Radix => "Radix Sort",
            SortAlgorithm::Bogo => "Bogo Sort",
        }
    }

    /// What the progress counter counts for this algorithm
    pub fn counter_label(&self) -> &'static str {
        match self {
            SortAlgorithm::Shell | SortAlgorithm::Radix => "Operations",
            SortAlgorithm::Bogo => "Iterations",
        }
    }
}

impl std::fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
