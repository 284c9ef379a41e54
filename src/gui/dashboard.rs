//! Dashboard Widget
//! Central scrollable panel: summary metrics, charts, title words and
//! a sample of the filtered records.

use crate::charts::ChartPlotter;
use crate::stats::{self, SummaryStats};
use egui::{Color32, RichText, ScrollArea};
use polars::prelude::*;

/// Rows shown in the data sample table.
const SAMPLE_ROWS: usize = 200;

/// One display row of the data sample.
pub struct SampleRow {
    pub cord_uid: String,
    pub title: String,
    pub journal: String,
    pub publish_time: String,
    pub abstract_text: String,
}

/// Everything the dashboard renders for one filter state.
///
/// Computed explicitly when a filter widget changes or a load completes;
/// there is no implicit recomputation graph.
pub struct DashboardData {
    pub summary: SummaryStats,
    pub year_counts: Vec<(i32, u32)>,
    pub top_journals: Vec<(String, u32)>,
    pub title_words: Vec<(String, u32)>,
    pub sample_rows: Vec<SampleRow>,
}

impl DashboardData {
    /// Filter the cleaned frame and run every aggregate over the result.
    pub fn compute(
        df: &DataFrame,
        year_range: (i32, i32),
        journal: Option<&str>,
        top_n: usize,
    ) -> Result<Self, PolarsError> {
        let filtered = stats::filter_records(df, year_range, journal)?;

        Ok(Self {
            summary: stats::summarize(&filtered)?,
            year_counts: stats::publications_by_year(&filtered)?,
            top_journals: stats::top_journals(&filtered, top_n)?,
            title_words: stats::title_word_counts(&filtered, top_n)?,
            sample_rows: Self::sample_rows(&filtered)?,
        })
    }

    fn sample_rows(df: &DataFrame) -> Result<Vec<SampleRow>, PolarsError> {
        let head = df.head(Some(SAMPLE_ROWS));
        let cord_uid = head.column("cord_uid")?;
        let title = head.column("title")?;
        let journal = head.column("journal")?;
        let publish_time = head.column("publish_time")?;
        let abstract_col = head.column("abstract")?;

        let mut rows = Vec::with_capacity(head.height());
        for i in 0..head.height() {
            rows.push(SampleRow {
                cord_uid: cell_text(cord_uid, i),
                title: cell_text(title, i),
                journal: cell_text(journal, i),
                publish_time: cell_text(publish_time, i),
                abstract_text: cell_text(abstract_col, i),
            });
        }

        Ok(rows)
    }
}

fn cell_text(column: &Column, idx: usize) -> String {
    match column.get(idx) {
        Ok(value) if !value.is_null() => value.to_string().trim_matches('"').to_string(),
        _ => String::new(),
    }
}

fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}…")
    }
}

/// Central dashboard area.
pub struct Dashboard {
    data: Option<DashboardData>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self { data: None }
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the current view (new file being loaded).
    pub fn clear(&mut self) {
        self.data = None;
    }

    pub fn set_data(&mut self, data: DashboardData) {
        self.data = Some(data);
    }

    /// Draw the dashboard
    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(data) = &self.data else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Data").size(20.0));
            });
            return;
        };

        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                Self::draw_summary(ui, &data.summary);

                ui.add_space(15.0);
                Self::section_heading(ui, "Publications by year");
                ChartPlotter::draw_year_chart(ui, &data.year_counts);

                ui.add_space(15.0);
                Self::section_heading(ui, "Top publishing journals");
                ChartPlotter::draw_journal_chart(ui, &data.top_journals);

                ui.add_space(15.0);
                Self::section_heading(ui, "Common title words");
                Self::draw_word_table(ui, &data.title_words);

                ui.add_space(15.0);
                Self::section_heading(ui, "Data sample");
                Self::draw_sample_table(ui, &data.sample_rows);

                ui.add_space(10.0);
            });
    }

    fn section_heading(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(16.0).strong());
        ui.add_space(5.0);
    }

    fn draw_summary(ui: &mut egui::Ui, summary: &SummaryStats) {
        ui.horizontal(|ui| {
            Self::metric_tile(ui, &summary.total_papers.to_string(), "Total papers");
            Self::metric_tile(ui, &summary.unique_journals.to_string(), "Unique journals");
            Self::metric_tile(
                ui,
                &summary.avg_abstract_words.to_string(),
                "Avg abstract words",
            );
        });
    }

    fn metric_tile(ui: &mut egui::Ui, value: &str, label: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.set_min_width(140.0);
                    ui.label(
                        RichText::new(value)
                            .size(24.0)
                            .strong()
                            .color(Color32::from_rgb(100, 149, 237)),
                    );
                    ui.label(RichText::new(label).size(11.0).color(Color32::GRAY));
                });
            });
        ui.add_space(10.0);
    }

    fn draw_word_table(ui: &mut egui::Ui, words: &[(String, u32)]) {
        if words.is_empty() {
            ui.label(RichText::new("No title words in the current selection").size(11.0));
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("title_words_table")
                    .striped(true)
                    .min_col_width(90.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new("Word").strong().size(11.0));
                        ui.label(RichText::new("Count").strong().size(11.0));
                        ui.end_row();

                        for (word, count) in words {
                            ui.label(RichText::new(word).size(11.0));
                            ui.label(RichText::new(count.to_string()).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }

    fn draw_sample_table(ui: &mut egui::Ui, rows: &[SampleRow]) {
        if rows.is_empty() {
            ui.label(RichText::new("No records match the current filters").size(11.0));
            return;
        }

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                egui::Grid::new("data_sample_table")
                    .striped(true)
                    .min_col_width(70.0)
                    .spacing([8.0, 4.0])
                    .show(ui, |ui| {
                        for header in ["cord_uid", "title", "journal", "publish_time", "abstract"]
                        {
                            ui.label(RichText::new(header).strong().size(11.0));
                        }
                        ui.end_row();

                        for row in rows {
                            ui.label(RichText::new(&row.cord_uid).size(11.0));
                            ui.label(RichText::new(ellipsize(&row.title, 60)).size(11.0));
                            ui.label(RichText::new(ellipsize(&row.journal, 30)).size(11.0));
                            ui.label(RichText::new(&row.publish_time).size(11.0));
                            ui.label(RichText::new(ellipsize(&row.abstract_text, 80)).size(11.0));
                            ui.end_row();
                        }
                    });
            });
    }
}
