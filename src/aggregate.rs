//! Language aggregation: fold per-repository byte maps into totals.

use indexmap::IndexMap;

use crate::github::RepositoryRecord;
use crate::snapshot::{ChartDataset, ChartEntry};

/// Summed byte counts per language, in first-seen order.
pub type LanguageTotals = IndexMap<String, u64>;

/// Sum per-language byte counts across all records.
///
/// A record with a null or absent `languages` map contributes nothing.
/// The fold is associative and commutative, so the result does not
/// depend on record order; only the iteration order of the returned map
/// (first-seen) does.
#[must_use]
pub fn sum_languages(records: &[RepositoryRecord]) -> LanguageTotals {
    let mut totals = LanguageTotals::new();
    for record in records {
        let Some(languages) = &record.languages else {
            continue;
        };
        for (language, bytes) in languages {
            *totals.entry(language.clone()).or_insert(0) += bytes;
        }
    }
    totals
}

/// Derive the chart-ready entry list: one entry per language, sorted
/// descending by value. Ties keep first-seen aggregation order (the
/// sort is stable).
#[must_use]
pub fn chart_entries(totals: &LanguageTotals) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = totals
        .iter()
        .map(|(language, value)| ChartEntry::new(language, *value))
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

/// Aggregate records straight into a named chart dataset.
#[must_use]
pub fn aggregate_dataset(
    records: &[RepositoryRecord],
    name: &str,
    last_updated: impl Into<String>,
) -> ChartDataset {
    let totals = sum_languages(records);
    ChartDataset {
        name: name.to_string(),
        description: format!("Language byte totals across {} repositories", records.len()),
        last_updated: last_updated.into(),
        languages: chart_entries(&totals),
    }
}

/// Most recent `updated_at` across the records, or empty if none carry
/// one. ISO-8601 timestamps compare correctly as strings.
#[must_use]
pub fn latest_update(records: &[RepositoryRecord]) -> String {
    records
        .iter()
        .filter_map(|record| record.updated_at.as_deref())
        .max()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
