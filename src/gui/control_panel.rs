//! Control Panel Widget
//! Left side panel with the file chooser and the dashboard filters.

use egui::{Color32, ComboBox, RichText, Slider};
use std::path::PathBuf;

/// Largest number of journals offered in the filter drop-down.
const JOURNAL_OPTION_CAP: usize = 200;

/// Current filter values, applied before aggregation.
#[derive(Clone)]
pub struct FilterSettings {
    pub csv_path: Option<PathBuf>,
    pub year_min: i32,
    pub year_max: i32,
    /// `None` means "All" journals.
    pub journal: Option<String>,
    pub top_n: usize,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            csv_path: None,
            year_min: 2019,
            year_max: 2022,
            journal: None,
            top_n: 10,
        }
    }
}

/// Left side control panel with file selection and filter widgets.
pub struct ControlPanel {
    pub settings: FilterSettings,
    pub year_bounds: Option<(i32, i32)>,
    pub journals: Vec<String>,
    pub progress: f32,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            settings: FilterSettings::default(),
            year_bounds: None,
            journals: Vec::new(),
            progress: 0.0,
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset filter widgets for a freshly loaded frame.
    pub fn update_filters(&mut self, year_bounds: Option<(i32, i32)>, mut journals: Vec<String>) {
        self.year_bounds = year_bounds;
        if let Some((lo, hi)) = year_bounds {
            // default view starts at the 2019 outbreak window when available
            self.settings.year_min = 2019i32.clamp(lo, hi);
            self.settings.year_max = hi;
        }
        journals.truncate(JOURNAL_OPTION_CAP);
        self.journals = journals;
        self.settings.journal = None;
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        // Title
        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🔬 CORD-19 Explorer")
                    .size(22.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.label(
                RichText::new("Metadata dashboard")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== CSV File Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .csv_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "No file selected".to_string());

                    ui.label(RichText::new(&path_text).size(12.0).color(
                        if self.settings.csv_path.is_some() {
                            Color32::WHITE
                        } else {
                            Color32::GRAY
                        },
                    ));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("📂 Browse").clicked() {
                            action = ControlPanelAction::BrowseCsv;
                        }
                    });
                });
            });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Filters Section =====
        ui.label(RichText::new("🔧 Filters").size(14.0).strong());
        ui.add_space(8.0);

        match self.year_bounds {
            Some((lo, hi)) => {
                if ui
                    .add(Slider::new(&mut self.settings.year_min, lo..=hi).text("From year"))
                    .changed()
                {
                    action = ControlPanelAction::FiltersChanged;
                }
                if ui
                    .add(Slider::new(&mut self.settings.year_max, lo..=hi).text("To year"))
                    .changed()
                {
                    action = ControlPanelAction::FiltersChanged;
                }
                if self.settings.year_min > self.settings.year_max {
                    self.settings.year_max = self.settings.year_min;
                }

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    ui.add_sized([70.0, 20.0], egui::Label::new("Journal:"));
                    ComboBox::from_id_salt("journal_filter")
                        .width(180.0)
                        .selected_text(self.settings.journal.as_deref().unwrap_or("All"))
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_label(self.settings.journal.is_none(), "All")
                                .clicked()
                            {
                                self.settings.journal = None;
                                action = ControlPanelAction::FiltersChanged;
                            }
                            for journal in &self.journals {
                                let selected =
                                    self.settings.journal.as_deref() == Some(journal.as_str());
                                if ui.selectable_label(selected, journal).clicked() {
                                    self.settings.journal = Some(journal.clone());
                                    action = ControlPanelAction::FiltersChanged;
                                }
                            }
                        });
                });
            }
            None => {
                ui.label(
                    RichText::new("Load a metadata CSV to enable filters")
                        .size(11.0)
                        .color(Color32::GRAY),
                );
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Display Section =====
        ui.label(RichText::new("📊 Display").size(14.0).strong());
        ui.add_space(5.0);

        if ui
            .add(Slider::new(&mut self.settings.top_n, 5..=50).text("Top N"))
            .changed()
        {
            action = ControlPanelAction::FiltersChanged;
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Progress Section =====
        ui.add(
            egui::ProgressBar::new(self.progress / 100.0)
                .show_percentage()
                .animate(self.progress > 0.0 && self.progress < 100.0),
        );

        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else if self.status.contains("Loaded") {
            Color32::from_rgb(40, 167, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set progress and status
    pub fn set_progress(&mut self, progress: f32, status: &str) {
        self.progress = progress;
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    BrowseCsv,
    FiltersChanged,
}
