//! Stats module - aggregation over the cleaned metadata

mod aggregate;

pub use aggregate::{
    filter_records, journal_options, publications_by_year, summarize, title_word_counts,
    top_journals, year_bounds, SummaryStats,
};
