//! Sortik - Main Entry Point
//!
//! A sorting-algorithm visualizer: shell, radix, and bogo sort running
//! on background threads, plotted live as bar charts.

use sortik::{config::AppState, frontend::SortikApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sortik=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Sortik");

    let state = AppState::load_or_default();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([900.0, 600.0])
        .with_min_inner_size([400.0, 300.0])
        .with_title("Sortik");
    if state.ui_preferences.transparent_window {
        // Overlay mode: borderless, see-through, screen-filling.
        viewport = viewport
            .with_decorations(false)
            .with_transparent(true)
            .with_maximized(true);
    }

    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Sortik",
        native_options,
        Box::new(|cc| {
            if state.ui_preferences.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(SortikApp::new(cc, state)))
        }),
    )
}
