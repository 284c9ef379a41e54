//! CORD-19 Explorer - Metadata Cleaning, Aggregation & Interactive Dashboard
//!
//! A Rust application for exploring the CORD-19 metadata CSV: cleans the
//! raw file, aggregates publication statistics and renders them with
//! filterable charts.

mod charts;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::ExplorerApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([1000.0, 640.0])
            .with_title("CORD-19 Explorer"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "CORD-19 Explorer",
        options,
        Box::new(|cc| Ok(Box::new(ExplorerApp::new(cc)))),
    )
}
