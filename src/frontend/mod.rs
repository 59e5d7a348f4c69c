//! Frontend module for the egui UI
//!
//! The frontend is a single [`SortikApp`] implementing [`eframe::App`].
//! Every frame it polls the [`SortSession`] (completion events, missed
//! reseeds), reads each runner's progress snapshot, and redraws two
//! floating windows: the control panel and the chart window. It never
//! blocks on sort completion; whatever state the runners' arrays are in
//! is what gets plotted.
//!
//! # Submodules
//!
//! - `control_panel` - buttons, slider, per-algorithm status lines
//! - `plot` - downsampling and bar-chart construction

pub mod control_panel;
pub mod plot;

pub use control_panel::{AlgorithmStatus, ControlAction, ControlPanelContext};
pub use plot::{downsample, sort_chart, MAX_PLOT_POINTS};

use crate::config::AppState;
use crate::session::SortSession;
use egui_plot::{Legend, Plot};

/// Main application state for the visualizer
pub struct SortikApp {
    /// Persisted state (array length, enabled sorts, preferences)
    state: AppState,

    /// Master array, runners, and the completion event channel
    session: SortSession,
}

impl SortikApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        let session = SortSession::new(state.array_len);
        Self { state, session }
    }

    fn apply_action(&mut self, action: ControlAction) {
        match action {
            ControlAction::Shuffle => {
                let mut rng = rand::rng();
                self.session.shuffle_master(&mut rng);
            }
            ControlAction::ArrayLenChanged(len) => {
                self.session.set_array_len(len);
            }
            ControlAction::BeginSort => {
                self.session.begin(&self.state.enabled);
            }
        }
    }

    fn show_control_window(&mut self, ctx: &egui::Context) {
        let statuses: Vec<AlgorithmStatus> = self
            .session
            .runners()
            .iter()
            .map(|runner| AlgorithmStatus {
                algorithm: runner.algorithm(),
                progress: runner.progress(),
                has_run: runner.has_run(),
            })
            .collect();

        let mut actions = Vec::new();
        egui::Window::new("Sortik")
            .resizable(false)
            .show(ctx, |ui| {
                let mut panel_ctx = ControlPanelContext {
                    state: &mut self.state,
                    statuses: &statuses,
                    frame_time: ctx.input(|i| i.stable_dt),
                };
                actions = control_panel::render_control_panel(ui, &mut panel_ctx);
            });

        for action in actions {
            self.apply_action(action);
        }
    }

    fn show_chart_window(&self, ctx: &egui::Context) {
        if !self.state.enabled.any() {
            return;
        }

        egui::Window::new("Sort Window")
            .default_size([600.0, 400.0])
            .show(ctx, |ui| {
                if !self.state.render_charts {
                    ui.label("Chart rendering disabled");
                    return;
                }

                Plot::new("sort_chart")
                    .legend(Legend::default())
                    .show(ui, |plot_ui| {
                        for runner in self.session.runners() {
                            if !self.state.enabled.get(runner.algorithm()) {
                                continue;
                            }
                            let snapshot =
                                downsample(&runner.array_snapshot(), MAX_PLOT_POINTS);
                            plot_ui.bar_chart(sort_chart(runner.algorithm(), &snapshot));
                        }
                    });
                ui.label("Right-click the chart for X/Y auto-fit");
            });
    }
}

impl eframe::App for SortikApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.poll_events();

        // Backdrop; fully transparent in overlay mode.
        let frame = if self.state.ui_preferences.transparent_window {
            egui::Frame::NONE
        } else {
            egui::Frame::central_panel(&ctx.style())
        };
        egui::CentralPanel::default().frame(frame).show(ctx, |_ui| {});

        self.show_control_window(ctx);
        self.show_chart_window(ctx);

        // Keep timers and charts moving while any sort is in flight.
        if self.session.any_running() {
            ctx.request_repaint();
        }
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        if self.state.ui_preferences.transparent_window {
            [0.0, 0.0, 0.0, 0.0]
        } else {
            [0.1, 0.1, 0.1, 1.0]
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}
