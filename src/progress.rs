//! Per-run progress records
//!
//! Each sort runner owns one [`SortProgress`] instance. The sorting thread
//! increments the operation counter as it works and freezes the elapsed
//! time exactly once at completion; the UI thread reads a [`ProgressSnapshot`]
//! every frame without blocking the sort.
//!
//! Progress is per runner instance, owned by the application, never a
//! process-wide static.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A point-in-time view of a run, read by the render loop each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Operations (or shuffle attempts, for bogo sort) performed so far
    pub operations: u64,
    /// Time since the run started; frozen once the run finishes
    pub elapsed: Duration,
    /// Whether the run has completed
    pub finished: bool,
}

/// Shared progress record for one sort runner
///
/// The counter is monotonically non-decreasing between [`reset`](Self::reset)
/// calls. `Ordering::Relaxed` is sufficient everywhere: the counter and the
/// elapsed time are display values with no ordering relationship to the
/// array contents, which are guarded by the runner's mutex.
#[derive(Debug, Default)]
pub struct SortProgress {
    operations: AtomicU64,
    finished: AtomicBool,
    elapsed_us: AtomicU64,
    started_at: Mutex<Option<Instant>>,
}

impl SortProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new run: zero the counter and restart the clock
    pub fn reset(&self) {
        self.operations.store(0, Ordering::Relaxed);
        self.finished.store(false, Ordering::Relaxed);
        self.elapsed_us.store(0, Ordering::Relaxed);
        *self.started_at.lock().unwrap_or_else(|e| e.into_inner()) = Some(Instant::now());
    }

    /// Record one unit of work
    pub fn record(&self) {
        self.operations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record several units of work at once
    pub fn record_many(&self, count: u64) {
        self.operations.fetch_add(count, Ordering::Relaxed);
    }

    /// Freeze the elapsed time and mark the run finished
    pub fn finish(&self) {
        let elapsed = self.elapsed_since_start();
        self.elapsed_us
            .store(elapsed.as_micros() as u64, Ordering::Relaxed);
        self.finished.store(true, Ordering::Relaxed);
    }

    /// Whether this record has ever been started
    pub fn has_started(&self) -> bool {
        self.started_at
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .is_some()
    }

    /// Current operation count
    pub fn operations(&self) -> u64 {
        self.operations.load(Ordering::Relaxed)
    }

    /// Elapsed run time: live while running, frozen once finished
    pub fn elapsed(&self) -> Duration {
        if self.finished.load(Ordering::Relaxed) {
            Duration::from_micros(self.elapsed_us.load(Ordering::Relaxed))
        } else {
            self.elapsed_since_start()
        }
    }

    /// Take a consistent-enough view for display
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            operations: self.operations(),
            elapsed: self.elapsed(),
            finished: self.finished.load(Ordering::Relaxed),
        }
    }

    fn elapsed_since_start(&self) -> Duration {
        self.started_at
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .map(|start| start.elapsed())
            .unwrap_or(Duration::ZERO)
    }
}
