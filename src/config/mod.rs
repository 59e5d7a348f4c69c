//! Configuration module for Sortik
//!
//! Handles persistence of application state between sessions: the last
//! array length, which sorts were enabled, and window preferences.
//!
//! # App Data Location
//!
//! State is stored in the platform-appropriate location:
//! - **Linux**: `~/.local/share/dev.sortik/`
//! - **macOS**: `~/Library/Application Support/dev.sortik/`
//! - **Windows**: `%APPDATA%\dev.sortik\`
//!
//! Load failures fall back to defaults with a warning; save failures are
//! logged and never fatal.

use crate::error::{Result, SortikError};
use crate::types::{SortAlgorithm, DEFAULT_ARRAY_LEN, MAX_ARRAY_LEN, MIN_ARRAY_LEN};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for data directories
pub const APP_ID: &str = "dev.sortik";

/// App state filename
pub const APP_STATE_FILE: &str = "app_state.json";

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the app state file
pub fn app_state_path() -> Option<PathBuf> {
    app_data_dir().map(|p| p.join(APP_STATE_FILE))
}

/// Window and theme preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Dark or light egui visuals
    pub dark_mode: bool,

    /// Borderless, transparent, screen-filling window (the original
    /// demo's color-keyed overlay mode)
    pub transparent_window: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            transparent_window: false,
        }
    }
}

/// Which sorts are selected to run; all off until the user ticks one
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EnabledSorts {
    pub shell: bool,
    pub radix: bool,
    pub bogo: bool,
}

impl EnabledSorts {
    pub fn get(&self, algorithm: SortAlgorithm) -> bool {
        match algorithm {
            SortAlgorithm::Shell => self.shell,
            SortAlgorithm::Radix => self.radix,
            SortAlgorithm::Bogo => self.bogo,
        }
    }

    pub fn get_mut(&mut self, algorithm: SortAlgorithm) -> &mut bool {
        match algorithm {
            SortAlgorithm::Shell => &mut self.shell,
            SortAlgorithm::Radix => &mut self.radix,
            SortAlgorithm::Bogo => &mut self.bogo,
        }
    }

    pub fn any(&self) -> bool {
        self.shell || self.radix || self.bogo
    }
}

/// Persisted application state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Array length, clamped to the selectable range on load
    pub array_len: usize,

    /// Which sorts were enabled last session
    pub enabled: EnabledSorts,

    /// Whether the chart window renders its plots
    pub render_charts: bool,

    /// Window and theme preferences
    pub ui_preferences: UiPreferences,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            array_len: DEFAULT_ARRAY_LEN,
            enabled: EnabledSorts::default(),
            render_charts: true,
            ui_preferences: UiPreferences::default(),
        }
    }
}

impl AppState {
    /// Load app state from the default location, or fall back to defaults
    pub fn load_or_default() -> Self {
        match app_state_path() {
            Some(path) if path.exists() => match Self::load(&path) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Failed to load app state: {}", e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    /// Load app state from a specific path
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut state: AppState = serde_json::from_str(&contents)?;
        state.array_len = state.array_len.clamp(MIN_ARRAY_LEN, MAX_ARRAY_LEN);
        Ok(state)
    }

    /// Save app state to the default location
    pub fn save(&self) -> Result<()> {
        let path = app_state_path().ok_or_else(|| {
            SortikError::Config("Could not determine app data directory".to_string())
        })?;
        self.save_to(&path)
    }

    /// Save app state to a specific path, creating parent directories
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
