//! CORD-19 Explorer Main Application
//! Main window with control panel and dashboard.

use crate::data::{clean_metadata, MetadataLoader};
use crate::gui::dashboard::DashboardData;
use crate::gui::{ControlPanel, ControlPanelAction, Dashboard};
use egui::SidePanel;
use polars::prelude::DataFrame;
use std::sync::mpsc::{channel, Receiver};
use std::thread;

/// CSV loading result from background thread
enum LoadResult {
    Progress(String),
    Complete(DataFrame),
    Error(String),
}

/// Main application window.
///
/// Owns the cleaned frame (the load-once cache) and recomputes the dashboard
/// only when a filter changes or a new file finishes loading.
pub struct ExplorerApp {
    loader: MetadataLoader,
    control_panel: ControlPanel,
    dashboard: Dashboard,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl ExplorerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            loader: MetadataLoader::new(),
            control_panel: ControlPanel::new(),
            dashboard: Dashboard::new(),
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle CSV file selection - load and clean off the UI thread.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return; // Already loading
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.dashboard.clear();
            self.control_panel.settings.csv_path = Some(path.clone());
            self.control_panel.set_progress(0.0, "Loading CSV file...");
            self.is_loading = true;

            let (tx, rx) = channel();
            self.load_rx = Some(rx);

            thread::spawn(move || {
                let _ = tx.send(LoadResult::Progress("Reading CSV file...".to_string()));

                let result = MetadataLoader::read_csv(&path, None)
                    .map_err(|e| e.to_string())
                    .and_then(|df| {
                        let _ =
                            tx.send(LoadResult::Progress("Cleaning metadata...".to_string()));
                        clean_metadata(&df).map_err(|e| e.to_string())
                    });

                match result {
                    Ok(df) => {
                        let _ = tx.send(LoadResult::Complete(df));
                    }
                    Err(e) => {
                        let _ = tx.send(LoadResult::Error(e));
                    }
                }
            });
        }
    }

    /// Check for CSV loading results
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Progress(status) => {
                        self.control_panel.set_progress(0.0, &status);
                    }
                    LoadResult::Complete(df) => {
                        self.loader.set_dataframe(df);
                        self.refresh_filters();
                        self.recompute_dashboard();
                        let row_count = self.loader.get_row_count();
                        self.control_panel
                            .set_progress(100.0, &format!("Loaded {} rows", row_count));
                        log::info!("loaded and cleaned {} metadata rows", row_count);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        self.control_panel
                            .set_progress(0.0, &format!("Error: {}", error));
                        log::warn!("metadata load failed: {}", error);
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Populate filter widgets from the freshly cleaned frame.
    fn refresh_filters(&mut self) {
        let Some(df) = self.loader.get_dataframe() else {
            return;
        };

        let year_bounds = crate::stats::year_bounds(df).ok().flatten();
        let journals = crate::stats::journal_options(df).unwrap_or_default();
        self.control_panel.update_filters(year_bounds, journals);
    }

    /// Re-run filter + aggregates for the current filter settings.
    fn recompute_dashboard(&mut self) {
        let year_range = (
            self.control_panel.settings.year_min,
            self.control_panel.settings.year_max,
        );
        let journal = self.control_panel.settings.journal.clone();
        let top_n = self.control_panel.settings.top_n;

        let Some(df) = self.loader.get_dataframe() else {
            return;
        };

        match DashboardData::compute(df, year_range, journal.as_deref(), top_n) {
            Ok(data) => self.dashboard.set_data(data),
            Err(e) => {
                log::warn!("dashboard recompute failed: {}", e);
                self.control_panel
                    .set_progress(0.0, &format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for background results
        self.check_load_results();

        // Request repaint while loading
        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let action = self.control_panel.show(ui);

                    match action {
                        ControlPanelAction::BrowseCsv => self.handle_browse_csv(),
                        ControlPanelAction::FiltersChanged => self.recompute_dashboard(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        // Central panel - Dashboard
        egui::CentralPanel::default().show(ctx, |ui| {
            self.dashboard.show(ui);
        });
    }
}
