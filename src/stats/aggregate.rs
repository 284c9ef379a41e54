//! Aggregation Module
//! Stateless summaries over the cleaned metadata frame: filtering,
//! top-N rankings and per-year counts feeding the dashboard.

use polars::prelude::*;
use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

/// Scalar summary of a (filtered) metadata frame.
#[derive(Debug, Clone, Default)]
pub struct SummaryStats {
    pub total_papers: usize,
    pub unique_journals: usize,
    /// Mean of `abstract_word_count`, truncated; 0 for an empty frame.
    pub avg_abstract_words: i64,
}

/// Filter rows to an inclusive year range and, optionally, one journal.
///
/// Rows with a null `year` never match the range predicate and drop out.
pub fn filter_records(
    df: &DataFrame,
    year_range: (i32, i32),
    journal: Option<&str>,
) -> Result<DataFrame, PolarsError> {
    let mut predicate = col("year")
        .gt_eq(lit(year_range.0))
        .and(col("year").lt_eq(lit(year_range.1)));
    if let Some(journal) = journal {
        predicate = predicate.and(col("journal").eq(lit(journal)));
    }

    df.clone().lazy().filter(predicate).collect()
}

/// Top `top_n` journals by publication count, descending.
///
/// Counts accumulate in row order and the sort is stable, so journals with
/// equal counts keep first-encountered order. `top_n == 0` yields an empty
/// result; the `"Unknown"` fill value counts as a normal journal.
pub fn top_journals(df: &DataFrame, top_n: usize) -> Result<Vec<(String, u32)>, PolarsError> {
    let journals = df.column("journal")?.str()?;

    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for journal in journals.into_iter().flatten() {
        let count = counts.entry(journal).or_insert(0);
        if *count == 0 {
            order.push(journal);
        }
        *count += 1;
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|journal| (journal.to_string(), counts[journal]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    Ok(ranked)
}

/// Most common title words: lower-cased, purely alphabetic, longer than
/// two characters. Same tie-break rule as [`top_journals`].
pub fn title_word_counts(
    df: &DataFrame,
    top_n: usize,
) -> Result<Vec<(String, u32)>, PolarsError> {
    let titles = df.column("title")?.str()?;

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();
    for title in titles.into_iter().flatten() {
        for word in title.to_lowercase().split_whitespace() {
            if word.chars().count() > 2 && word.chars().all(char::is_alphabetic) {
                match counts.entry(word.to_string()) {
                    Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                    Entry::Vacant(entry) => {
                        order.push(word.to_string());
                        entry.insert(1);
                    }
                }
            }
        }
    }

    let mut ranked: Vec<(String, u32)> = order
        .into_iter()
        .map(|word| {
            let count = counts[&word];
            (word, count)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    Ok(ranked)
}

/// Publication counts per year, ascending; rows with a null year are skipped.
pub fn publications_by_year(df: &DataFrame) -> Result<Vec<(i32, u32)>, PolarsError> {
    let years = df.column("year")?.i32()?;

    let mut counts: BTreeMap<i32, u32> = BTreeMap::new();
    for year in years.into_iter().flatten() {
        *counts.entry(year).or_insert(0) += 1;
    }

    Ok(counts.into_iter().collect())
}

/// Compute the dashboard's scalar summary for a (filtered) frame.
pub fn summarize(df: &DataFrame) -> Result<SummaryStats, PolarsError> {
    let unique_journals = df.column("journal")?.unique()?.len();

    let word_counts = df
        .column("abstract_word_count")?
        .cast(&DataType::Float64)?;
    let avg_abstract_words = word_counts.f64()?.mean().unwrap_or(0.0) as i64;

    Ok(SummaryStats {
        total_papers: df.height(),
        unique_journals,
        avg_abstract_words,
    })
}

/// Min and max of the `year` column; `None` when every year is null.
pub fn year_bounds(df: &DataFrame) -> Result<Option<(i32, i32)>, PolarsError> {
    let years = df.column("year")?.i32()?;
    Ok(years.min().zip(years.max()))
}

/// Sorted distinct journal names, for the filter drop-down.
pub fn journal_options(df: &DataFrame) -> Result<Vec<String>, PolarsError> {
    let unique = df.column("journal")?.unique()?;
    let series = unique.as_materialized_series();

    let mut journals: Vec<String> = series
        .iter()
        .filter_map(|value| {
            if value.is_null() {
                None
            } else {
                Some(value.to_string().trim_matches('"').to_string())
            }
        })
        .collect();
    journals.sort();

    Ok(journals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean_metadata;

    fn cleaned_df() -> DataFrame {
        let df = df!(
            "cord_uid" => ["a1", "b2", "c3", "d4"],
            "title" => [
                Some("Covid Vaccine Trial"),
                Some("Another Covid Study"),
                Some("Flu Season Review 2019"),
                None,
            ],
            "abstract" => [Some("A short abstract here"), None, Some("Two words"), None],
            "journal" => [Some("Nature"), Some("Nature"), Some("Lancet"), None],
            "publish_time" => [
                Some("2020-05-01"),
                Some("bad-date"),
                Some("2019-11-20"),
                Some("2021-02-03"),
            ],
        )
        .unwrap();
        clean_metadata(&df).unwrap()
    }

    fn empty_df() -> DataFrame {
        let df = df!(
            "cord_uid" => Vec::<String>::new(),
            "title" => Vec::<String>::new(),
            "abstract" => Vec::<String>::new(),
            "journal" => Vec::<String>::new(),
            "publish_time" => Vec::<String>::new(),
        )
        .unwrap();
        clean_metadata(&df).unwrap()
    }

    #[test]
    fn top_journals_counts_and_ranks() {
        let df = cleaned_df();
        let ranked = top_journals(&df, 10).unwrap();

        assert_eq!(ranked[0], ("Nature".to_string(), 2));
        // "Unknown" fill value is a normal group
        assert!(ranked.contains(&("Unknown".to_string(), 1)));
        assert!(ranked.contains(&("Lancet".to_string(), 1)));

        let total: u32 = ranked.iter().map(|(_, count)| count).sum();
        assert!(total as usize <= df.height());
    }

    #[test]
    fn top_journals_ties_keep_row_order() {
        let df = df!(
            "journal" => ["Cell", "BMJ", "Cell", "BMJ", "Lancet"],
        )
        .unwrap();

        let ranked = top_journals(&df, 10).unwrap();
        assert_eq!(
            ranked,
            vec![
                ("Cell".to_string(), 2),
                ("BMJ".to_string(), 2),
                ("Lancet".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_journals_truncates_and_handles_empty() {
        let df = cleaned_df();
        assert_eq!(top_journals(&df, 1).unwrap().len(), 1);
        assert_eq!(top_journals(&df, 0).unwrap(), vec![]);
        assert_eq!(top_journals(&empty_df(), 10).unwrap(), vec![]);
    }

    #[test]
    fn title_words_filter_short_and_non_alphabetic() {
        let df = cleaned_df();
        let words = title_word_counts(&df, 10).unwrap();

        assert!(words.contains(&("covid".to_string(), 2)));
        // "a" is too short, "2019" is not alphabetic
        assert!(words.iter().all(|(word, _)| word.chars().count() > 2));
        assert!(words
            .iter()
            .all(|(word, _)| word.chars().all(char::is_alphabetic)));
        assert_eq!(title_word_counts(&empty_df(), 10).unwrap(), vec![]);
    }

    #[test]
    fn title_words_ignore_punctuated_tokens() {
        let df = df!(
            "title" => ["COVID-19 spread, spread dynamics"],
        )
        .unwrap();

        let words = title_word_counts(&df, 10).unwrap();
        // "covid-19" and "spread," carry punctuation and are dropped whole
        assert_eq!(
            words,
            vec![("spread".to_string(), 1), ("dynamics".to_string(), 1)]
        );
    }

    #[test]
    fn publications_by_year_ascending_nulls_excluded() {
        let df = cleaned_df();
        let by_year = publications_by_year(&df).unwrap();

        // row with "bad-date" has no year and is excluded
        assert_eq!(by_year, vec![(2019, 1), (2020, 1), (2021, 1)]);
    }

    #[test]
    fn filter_is_inclusive_and_drops_null_years() {
        let df = cleaned_df();

        let filtered = filter_records(&df, (2019, 2020), None).unwrap();
        assert_eq!(filtered.height(), 2);

        let filtered = filter_records(&df, (2019, 2021), Some("Nature")).unwrap();
        assert_eq!(filtered.height(), 1); // the "bad-date" Nature row has no year

        let filtered = filter_records(&df, (1990, 1995), None).unwrap();
        assert_eq!(filtered.height(), 0);
    }

    #[test]
    fn summarize_truncates_mean() {
        let df = cleaned_df();
        let summary = summarize(&df).unwrap();

        assert_eq!(summary.total_papers, 4);
        assert_eq!(summary.unique_journals, 3);
        // word counts are [4, 0, 2, 0], mean 1.5 truncated to 1
        assert_eq!(summary.avg_abstract_words, 1);

        let empty = summarize(&empty_df()).unwrap();
        assert_eq!(empty.total_papers, 0);
        assert_eq!(empty.avg_abstract_words, 0);
    }

    #[test]
    fn widget_helpers() {
        let df = cleaned_df();

        assert_eq!(year_bounds(&df).unwrap(), Some((2019, 2021)));
        assert_eq!(
            journal_options(&df).unwrap(),
            vec!["Lancet", "Nature", "Unknown"]
        );
        assert_eq!(year_bounds(&empty_df()).unwrap(), None);
    }
}
