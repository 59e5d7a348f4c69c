//! # Sortik: a sorting-algorithm visualizer
//!
//! A desktop toy that runs shell sort, radix sort, and bogo sort on
//! background threads and plots the array state live as a bar chart.
//!
//! ## Architecture
//!
//! - **Sorts**: in-place algorithm implementations that step through a
//!   mutex-guarded array so the UI can snapshot intermediate states
//! - **Runner**: one background thread per algorithm, owning a private
//!   copy of the array and a progress record read by the UI every frame
//! - **Session**: the master array plus all runners; reseeds that miss a
//!   busy runner are latched and retried until every copy agrees
//! - **Frontend**: eframe/egui application with egui_plot bar charts
//! - **Communication**: crossbeam channel for runner completion events
//!
//! ## Configuration
//!
//! Application state (array length, enabled sorts, window preferences)
//! is stored as JSON in the platform data directory under `dev.sortik`:
//!
//! - **Linux**: `~/.local/share/dev.sortik/`
//! - **macOS**: `~/Library/Application Support/dev.sortik/`
//! - **Windows**: `%APPDATA%\dev.sortik\`
//!
//! ## Example
//!
//! ```ignore
//! use sortik::{config::AppState, frontend::SortikApp};
//!
//! fn main() -> eframe::Result<()> {
//!     let state = AppState::load_or_default();
//!     let native_options = eframe::NativeOptions::default();
//!     eframe::run_native(
//!         "Sortik",
//!         native_options,
//!         Box::new(|cc| Ok(Box::new(SortikApp::new(cc, state)))),
//!     )
//! }
//! ```

pub mod config;
pub mod error;
pub mod frontend;
pub mod progress;
pub mod runner;
pub mod session;
pub mod sorts;
pub mod types;

// Re-export commonly used types
pub use config::AppState;
pub use error::{Result, SortikError};
pub use frontend::SortikApp;
pub use progress::{ProgressSnapshot, SortProgress};
pub use runner::{RunnerEvent, SortRunner};
pub use session::SortSession;
pub use types::SortAlgorithm;
