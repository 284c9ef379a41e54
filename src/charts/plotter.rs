//! Chart Plotter Module
//! Interactive dashboard charts using egui_plot.

use egui::Color32;
use egui_plot::{Bar, BarChart, Plot};

/// Bar color for the publications-by-year chart
pub const YEAR_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue
/// Bar color for the top-journals chart
pub const JOURNAL_COLOR: Color32 = Color32::from_rgb(46, 204, 113); // Green

/// Creates dashboard visualizations using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the publications-by-year bar chart.
    /// X-axis: year, Y-axis: paper count.
    pub fn draw_year_chart(ui: &mut egui::Ui, year_counts: &[(i32, u32)]) {
        let bars: Vec<Bar> = year_counts
            .iter()
            .map(|&(year, count)| {
                Bar::new(year as f64, count as f64)
                    .width(0.8)
                    .name(year.to_string())
            })
            .collect();

        Plot::new("publications_by_year")
            .height(240.0)
            .allow_scroll(false)
            .x_axis_label("Year")
            .y_axis_label("Papers")
            .x_axis_formatter(|mark, _range| {
                let year = mark.value.round();
                if (mark.value - year).abs() < 1e-6 {
                    format!("{}", year as i64)
                } else {
                    String::new()
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .color(YEAR_COLOR)
                        .name("Publications"),
                );
            });
    }

    /// Draw the top-journals horizontal bar chart, largest count on top.
    /// X-axis: paper count, Y-axis: journal.
    pub fn draw_journal_chart(ui: &mut egui::Ui, journal_counts: &[(String, u32)]) {
        let n = journal_counts.len();
        let bars: Vec<Bar> = journal_counts
            .iter()
            .enumerate()
            .map(|(rank, (journal, count))| {
                // rank 0 at the highest y position
                Bar::new((n - 1 - rank) as f64, *count as f64)
                    .width(0.6)
                    .name(journal)
            })
            .collect();

        let y_labels: Vec<String> = journal_counts
            .iter()
            .rev()
            .map(|(journal, _)| journal.clone())
            .collect();

        Plot::new("top_journals")
            .height((n as f32 * 26.0).max(120.0))
            .allow_scroll(false)
            .x_axis_label("Papers")
            .y_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                    return String::new();
                }
                y_labels
                    .get(idx as usize)
                    .cloned()
                    .unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(bars)
                        .horizontal()
                        .color(JOURNAL_COLOR)
                        .name("Journals"),
                );
            });
    }
}
