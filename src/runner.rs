//! Background sort runners
//!
//! One [`SortRunner`] per algorithm. Each runner owns a private copy of
//! the array behind an `Arc<Mutex<..>>` and a [`SortProgress`] record,
//! and launches at most one background thread at a time. The UI polls
//! runner status non-blockingly every frame; completion is additionally
//! announced over a crossbeam channel so results can be logged and
//! latched without joining the thread.
//!
//! Restarts are serialized: `start` refuses while a previous run is in
//! flight. There is no cancellation; a bogo run on a large array keeps
//! its thread until process exit.

use crate::progress::{ProgressSnapshot, SortProgress};
use crate::sorts::{bogo_sort, radix_sort, shell_sort};
use crate::types::SortAlgorithm;
use crossbeam_channel::Sender;
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::JoinHandle;
use std::time::Duration;

/// Events sent from runner threads to the UI
#[derive(Debug, Clone)]
pub enum RunnerEvent {
    /// A run completed; the runner's array now satisfies the sorted invariant
    Finished {
        algorithm: SortAlgorithm,
        operations: u64,
        elapsed: Duration,
    },
}

/// Owns one algorithm's array copy, progress record, and worker thread
pub struct SortRunner {
    algorithm: SortAlgorithm,
    array: Arc<Mutex<Vec<u32>>>,
    progress: Arc<SortProgress>,
    handle: Option<JoinHandle<()>>,
    events: Sender<RunnerEvent>,
}

impl SortRunner {
    /// Create a runner seeded with a copy of `seed`
    pub fn new(algorithm: SortAlgorithm, seed: &[u32], events: Sender<RunnerEvent>) -> Self {
        Self {
            algorithm,
            array: Arc::new(Mutex::new(seed.to_vec())),
            progress: Arc::new(SortProgress::new()),
            handle: None,
            events,
        }
    }

    pub fn algorithm(&self) -> SortAlgorithm {
        self.algorithm
    }

    /// Whether a run is currently in flight
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Launch a background run.
    ///
    /// Returns `false` without side effects if the previous run has not
    /// completed yet.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            tracing::debug!(algorithm = %self.algorithm, "sort already running, start ignored");
            return false;
        }

        self.progress.reset();

        let algorithm = self.algorithm;
        let array = Arc::clone(&self.array);
        let progress = Arc::clone(&self.progress);
        let events = self.events.clone();

        tracing::debug!(algorithm = %algorithm, len = self.lock_array().len(), "starting sort");
        self.handle = Some(std::thread::spawn(move || {
            match algorithm {
                SortAlgorithm::Shell => shell_sort(&array, &progress),
                SortAlgorithm::Radix => radix_sort(&array, &progress),
                SortAlgorithm::Bogo => bogo_sort(&array, &progress),
            }
            progress.finish();

            let snapshot = progress.snapshot();
            tracing::info!(
                algorithm = %algorithm,
                operations = snapshot.operations,
                elapsed_ms = snapshot.elapsed.as_millis() as u64,
                "sort finished"
            );
            // The UI may have shut down already; a dead channel is fine.
            let _ = events.send(RunnerEvent::Finished {
                algorithm,
                operations: snapshot.operations,
                elapsed: snapshot.elapsed,
            });
        }));
        true
    }

    /// Replace the private array copy with a fresh seed.
    ///
    /// Refused while a run is in flight, since the running sort owns the
    /// contents semantically.
    pub fn reseed(&mut self, seed: &[u32]) -> bool {
        if self.is_running() {
            tracing::warn!(algorithm = %self.algorithm, "cannot reseed while sorting");
            return false;
        }
        let mut values = self.lock_array();
        values.clear();
        values.extend_from_slice(seed);
        true
    }

    /// Clone the current array state for plotting.
    ///
    /// May capture a partially-sorted intermediate state; that is the
    /// point of the visualization.
    pub fn array_snapshot(&self) -> Vec<u32> {
        self.lock_array().clone()
    }

    /// Current progress for the status line
    pub fn progress(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }

    /// Whether this runner has ever been started
    pub fn has_run(&self) -> bool {
        self.progress.has_started()
    }

    fn lock_array(&self) -> MutexGuard<'_, Vec<u32>> {
        crate::sorts::lock(&self.array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorts::{is_sorted, sequence, shuffle};
    use crossbeam_channel::unbounded;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shuffled(n: usize, seed: u64) -> Vec<u32> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut values = sequence(n);
        shuffle(&mut values, &mut rng);
        values
    }

    #[test]
    fn test_run_to_completion_sorts_private_copy() {
        let (tx, rx) = unbounded();
        let mut runner = SortRunner::new(SortAlgorithm::Shell, &shuffled(500, 3), tx);
        assert!(!runner.has_run());
        assert!(runner.start());

        let event = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("runner should finish");
        let RunnerEvent::Finished {
            algorithm,
            operations,
            elapsed,
        } = event;
        assert_eq!(algorithm, SortAlgorithm::Shell);
        assert!(operations > 0);
        assert!(elapsed > Duration::ZERO);
        assert!(is_sorted(&runner.array_snapshot()));
        assert!(runner.progress().finished);
    }

    #[test]
    fn test_restart_allowed_after_completion() {
        let (tx, rx) = unbounded();
        let mut runner = SortRunner::new(SortAlgorithm::Radix, &shuffled(200, 4), tx);
        assert!(runner.start());
        rx.recv_timeout(Duration::from_secs(10)).unwrap();

        assert!(runner.reseed(&shuffled(200, 5)));
        assert!(runner.start());
        rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(is_sorted(&runner.array_snapshot()));
    }

    #[test]
    fn test_snapshot_does_not_block_on_completion() {
        let (tx, rx) = unbounded();
        let mut runner = SortRunner::new(SortAlgorithm::Shell, &shuffled(5000, 6), tx);
        runner.start();
        // Snapshots must be available mid-run, whatever state they show.
        let snapshot = runner.array_snapshot();
        assert_eq!(snapshot.len(), 5000);
        rx.recv_timeout(Duration::from_secs(30)).unwrap();
    }

    #[test]
    fn test_progress_counter_non_decreasing_across_run() {
        let (tx, rx) = unbounded();
        let mut runner = SortRunner::new(SortAlgorithm::Radix, &shuffled(2000, 7), tx);
        runner.start();

        let mut last = 0;
        while runner.is_running() {
            let now = runner.progress().operations;
            assert!(now >= last);
            last = now;
            std::thread::yield_now();
        }
        rx.recv_timeout(Duration::from_secs(10)).unwrap();
        assert!(runner.progress().operations >= last);
    }
}
