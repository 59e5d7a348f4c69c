//! Bar-chart rendering for sort snapshots
//!
//! Large arrays are step-downsampled before plotting so the chart never
//! submits more than [`MAX_PLOT_POINTS`] bars per algorithm.

use crate::types::SortAlgorithm;
use egui::Color32;
use egui_plot::{Bar, BarChart};

/// Hard cap on bars submitted to the plot per algorithm
pub const MAX_PLOT_POINTS: usize = 100_000;

/// Step-sample `values` down to at most `max_points` entries.
///
/// Sampling keeps every `step`-th element, preserving the overall shape
/// of the array at the cost of detail.
pub fn downsample(values: &[u32], max_points: usize) -> Vec<u32> {
    if values.len() <= max_points {
        return values.to_vec();
    }
    let step = values.len().div_ceil(max_points);
    values.iter().step_by(step).copied().collect()
}

/// Fixed chart color per algorithm
pub fn chart_color(algorithm: SortAlgorithm) -> Color32 {
    match algorithm {
        SortAlgorithm::Shell => Color32::from_rgb(100, 149, 237),
        SortAlgorithm::Radix => Color32::from_rgb(144, 238, 144),
        SortAlgorithm::Bogo => Color32::from_rgb(240, 128, 128),
    }
}

/// Build one algorithm's bar chart from an (already downsampled) snapshot
pub fn sort_chart(algorithm: SortAlgorithm, values: &[u32]) -> BarChart {
    let bars: Vec<Bar> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Bar::new(i as f64, f64::from(v)))
        .collect();
    BarChart::new(algorithm.label(), bars).color(chart_color(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::sequence;

    #[test]
    fn test_downsample_passthrough_when_small() {
        let values = sequence(1000);
        assert_eq!(downsample(&values, MAX_PLOT_POINTS), values);
    }

    #[test]
    fn test_downsample_respects_step() {
        let values = sequence(1000);
        let sampled = downsample(&values, 100);
        // step = 10, so every 10th element survives
        assert_eq!(sampled.len(), 100);
        assert_eq!(sampled[0], 0);
        assert_eq!(sampled[1], 10);
        assert_eq!(sampled[99], 990);
    }

    #[test]
    fn test_downsample_empty() {
        assert!(downsample(&[], 100).is_empty());
    }

    #[test]
    fn test_downsample_never_exceeds_cap() {
        // A length just over the cap rounds the step up, not down.
        for len in [101, 150, 199, 201, 999] {
            let sampled = downsample(&sequence(len), 100);
            assert!(
                sampled.len() <= 100,
                "len {} produced {} points",
                len,
                sampled.len()
            );
        }
    }
}
