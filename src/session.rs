//! Session state: the master array and its runners
//!
//! [`SortSession`] owns everything the UI does not draw directly: the
//! master array, one [`SortRunner`] per algorithm, and the completion
//! event channel. The frontend calls into it once per frame and in
//! response to button presses.
//!
//! A reseed (Shuffle, or a new array length) cannot land on a runner
//! whose sort is still in flight. The session marks such runners stale
//! and retries on every poll, so each private copy catches up with the
//! master as soon as its run finishes.

use crate::config::EnabledSorts;
use crate::runner::{RunnerEvent, SortRunner};
use crate::sorts::{sequence, shuffle};
use crate::types::SortAlgorithm;
use crossbeam_channel::Receiver;
use rand::Rng;

/// The master array plus one runner per algorithm
pub struct SortSession {
    /// Seeded `0..n`, reshuffled by the Shuffle button, copied into
    /// each runner before a run
    master: Vec<u32>,

    /// Runners in display order
    runners: Vec<SortRunner>,

    /// Runners whose private copy missed the latest master change
    stale: Vec<bool>,

    /// Completion events from runner threads
    events: Receiver<RunnerEvent>,
}

impl SortSession {
    pub fn new(array_len: usize) -> Self {
        let master = sequence(array_len);
        let (tx, rx) = crossbeam_channel::unbounded();
        let runners: Vec<SortRunner> = SortAlgorithm::ALL
            .iter()
            .map(|&algorithm| SortRunner::new(algorithm, &master, tx.clone()))
            .collect();
        let stale = vec![false; runners.len()];

        Self {
            master,
            runners,
            stale,
            events: rx,
        }
    }

    pub fn master(&self) -> &[u32] {
        &self.master
    }

    pub fn runners(&self) -> &[SortRunner] {
        &self.runners
    }

    pub fn runner(&self, algorithm: SortAlgorithm) -> Option<&SortRunner> {
        self.runners.iter().find(|r| r.algorithm() == algorithm)
    }

    /// Whether a runner's private copy still disagrees with the master
    pub fn is_stale(&self, algorithm: SortAlgorithm) -> bool {
        self.runners
            .iter()
            .zip(&self.stale)
            .any(|(runner, &stale)| runner.algorithm() == algorithm && stale)
    }

    pub fn any_running(&self) -> bool {
        self.runners.iter().any(|r| r.is_running())
    }

    /// Reshuffle the master array and push it to every runner
    pub fn shuffle_master(&mut self, rng: &mut impl Rng) {
        shuffle(&mut self.master, rng);
        self.reseed_runners();
    }

    /// Rebuild the master array at a new length and push it to every runner
    pub fn set_array_len(&mut self, len: usize) {
        self.master = sequence(len);
        self.reseed_runners();
    }

    /// Start every enabled, idle runner
    pub fn begin(&mut self, enabled: &EnabledSorts) {
        // A runner that went idle since the last poll must sort the
        // current master, not a copy it kept from before a reseed.
        self.catch_up_reseeds();
        for runner in &mut self.runners {
            if enabled.get(runner.algorithm()) {
                runner.start();
            }
        }
    }

    /// Per-frame upkeep: drain completion events and retry missed reseeds
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            let RunnerEvent::Finished {
                algorithm,
                operations,
                elapsed,
            } = event;
            tracing::debug!(
                algorithm = %algorithm,
                operations,
                elapsed_ms = elapsed.as_millis() as u64,
                "runner reported completion"
            );
        }
        self.catch_up_reseeds();
    }

    fn reseed_runners(&mut self) {
        for (runner, stale) in self.runners.iter_mut().zip(self.stale.iter_mut()) {
            *stale = !runner.reseed(&self.master);
        }
    }

    fn catch_up_reseeds(&mut self) {
        for (runner, stale) in self.runners.iter_mut().zip(self.stale.iter_mut()) {
            if *stale && runner.reseed(&self.master) {
                *stale = false;
            }
        }
    }
}
