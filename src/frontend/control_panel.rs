//! Main control window — shuffle/start buttons, array-size slider, and
//! one status section per algorithm.
//!
//! The panel mutates the persisted [`AppState`] directly (checkboxes,
//! slider, chart toggle) and returns [`ControlAction`]s for everything
//! that touches the runners, which the app applies afterwards.

use crate::config::AppState;
use crate::progress::ProgressSnapshot;
use crate::types::{SortAlgorithm, MAX_ARRAY_LEN, MIN_ARRAY_LEN};
use egui::Ui;

/// Actions the control panel can request from the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    /// Reshuffle the master array and reseed idle runners
    Shuffle,
    /// Start every enabled, idle runner
    BeginSort,
    /// Rebuild the master array at a new length
    ArrayLenChanged(usize),
}

/// Per-algorithm display status fed to the panel each frame
#[derive(Debug, Clone, Copy)]
pub struct AlgorithmStatus {
    pub algorithm: SortAlgorithm,
    pub progress: ProgressSnapshot,
    /// Whether the runner has ever been started (hides the status line
    /// until the first run)
    pub has_run: bool,
}

/// Context needed to render the control panel
pub struct ControlPanelContext<'a> {
    pub state: &'a mut AppState,
    pub statuses: &'a [AlgorithmStatus],
    /// Smoothed frame time in seconds, for the FPS readout
    pub frame_time: f32,
}

/// Render the control panel; returns the actions to apply this frame
pub fn render_control_panel(ui: &mut Ui, ctx: &mut ControlPanelContext<'_>) -> Vec<ControlAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        if ui.button("Shuffle").clicked() {
            actions.push(ControlAction::Shuffle);
        }
        if ui.button("Begin Sort").clicked() {
            actions.push(ControlAction::BeginSort);
        }
    });

    ui.label("Ctrl + left-click the slider to type a number");
    let slider = ui.add(
        egui::Slider::new(&mut ctx.state.array_len, MIN_ARRAY_LEN..=MAX_ARRAY_LEN)
            .text("Number of numbers"),
    );
    if slider.changed() {
        actions.push(ControlAction::ArrayLenChanged(ctx.state.array_len));
    }

    for status in ctx.statuses {
        let algorithm = status.algorithm;
        ui.separator();
        ui.strong(algorithm.label());
        ui.checkbox(ctx.state.enabled.get_mut(algorithm), "Run");
        if status.has_run {
            ui.label(status_line(algorithm, &status.progress));
        }
    }

    ui.separator();
    ui.checkbox(&mut ctx.state.render_charts, "Render charts");
    if ctx.frame_time > 0.0 {
        ui.label(format!(
            "Application average {:.3} ms/frame ({:.1} FPS)",
            ctx.frame_time * 1000.0,
            1.0 / ctx.frame_time
        ));
    }

    actions
}

/// Format one algorithm's status: live while running, frozen once done
fn status_line(algorithm: SortAlgorithm, progress: &ProgressSnapshot) -> String {
    format!(
        "Time: {:.2} sec, {}: {}",
        progress.elapsed.as_secs_f64(),
        algorithm.counter_label(),
        progress.operations
    )
}
