//! Metadata Cleaner Module
//! Normalizes publish dates and fills missing text fields (enrichment step).

use polars::prelude::*;
use thiserror::Error;

/// Columns the metadata file must provide before cleaning.
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["cord_uid", "title", "abstract", "journal", "publish_time"];

/// Journal name used when the source row has none.
pub const UNKNOWN_JOURNAL: &str = "Unknown";

#[derive(Error, Debug)]
pub enum CleanError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Clean and enrich a loaded metadata DataFrame.
///
/// Adds, in order: `publish_time` parsed to a date (unparseable strings
/// become null, never an error), `year` extracted from it, filled
/// `abstract`/`title`/`journal` columns, and `abstract_word_count`.
///
/// Row count is preserved and the operation is idempotent: cleaning an
/// already-cleaned frame returns an equal frame.
pub fn clean_metadata(df: &DataFrame) -> Result<DataFrame, CleanError> {
    for required in REQUIRED_COLUMNS {
        if df.column(required).is_err() {
            return Err(CleanError::MissingColumn(required.to_string()));
        }
    }

    // Already-parsed input (second clean) must not go through strptime again.
    let publish_expr = if df.column("publish_time")?.dtype() == &DataType::Date {
        col("publish_time")
    } else {
        col("publish_time")
            .cast(DataType::String)
            .str()
            .to_date(StrptimeOptions {
                format: Some("%Y-%m-%d".into()),
                strict: false,
                exact: true,
                cache: true,
            })
    };

    let mut cleaned = df
        .clone()
        .lazy()
        .with_column(publish_expr.alias("publish_time"))
        .with_column(col("publish_time").dt().year().alias("year"))
        .with_columns([
            col("abstract").cast(DataType::String).fill_null(lit("")),
            col("title").cast(DataType::String).fill_null(lit("")),
            col("journal")
                .cast(DataType::String)
                .fill_null(lit(UNKNOWN_JOURNAL)),
        ])
        .collect()?;

    // Whitespace-run tokenization: empty abstract counts as 0 words, not 1.
    let word_counts: Vec<u32> = cleaned
        .column("abstract")?
        .str()?
        .into_iter()
        .map(|text| {
            text.map(|t| t.split_whitespace().count() as u32)
                .unwrap_or(0)
        })
        .collect();
    cleaned.with_column(Column::new("abstract_word_count".into(), word_counts))?;

    Ok(cleaned)
}
