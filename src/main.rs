#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use paint_widget::{PaintApp, PaintConfig};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = match PaintConfig::default_path() {
        Some(path) => PaintConfig::load(&path).unwrap_or_else(|err| {
            log::error!("{err}; falling back to default settings");
            PaintConfig::default()
        }),
        None => PaintConfig::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 360.0])
            .with_title("PyPaint"),
        ..Default::default()
    };

    eframe::run_native(
        "PyPaint",
        native_options,
        Box::new(|cc| {
            let app = PaintApp::new(cc, config)?;
            Ok(Box::new(app))
        }),
    )
}
