use std::fmt::Write;

use serde_json::json;

use crate::aggregate::{chart_entries, sum_languages};
use crate::chart::format_grouped;
use crate::cli::{StatsArgs, StatsFormat};
use crate::github::RepositoryRecord;
use crate::snapshot::load_records;
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_stats(args: &StatsArgs) -> i32 {
    match run_stats_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Prints aggregated language totals from a snapshot.
///
/// # Errors
/// Returns an error if the snapshot is unreadable or malformed.
pub fn run_stats_impl(args: &StatsArgs) -> Result<()> {
    let records = load_records(&args.data)?;

    let output = match args.format {
        StatsFormat::Text => format_stats_text(&records),
        StatsFormat::Json => format_stats_json(&records)?,
    };
    println!("{output}");
    Ok(())
}

/// Text table: one row per language, descending by byte count, with
/// each language's share of the total.
#[must_use]
pub fn format_stats_text(records: &[RepositoryRecord]) -> String {
    let entries = chart_entries(&sum_languages(records));
    let total: u64 = entries.iter().map(|e| e.value).sum();

    let mut out = String::new();
    let _ = writeln!(out, "{:<20} {:>14} {:>8}", "Language", "Bytes", "Share");
    let _ = writeln!(out, "{}", "-".repeat(44));

    for entry in &entries {
        #[allow(clippy::cast_precision_loss)]
        let share = if total == 0 {
            0.0
        } else {
            entry.value as f64 / total as f64 * 100.0
        };
        let _ = writeln!(
            out,
            "{:<20} {:>14} {:>7.1}%",
            entry.language,
            format_grouped(entry.value),
            share
        );
    }

    let _ = writeln!(out, "{}", "-".repeat(44));
    let _ = write!(
        out,
        "{} languages, {} bytes across {} repositories",
        entries.len(),
        format_grouped(total),
        records.len()
    );
    out
}

fn format_stats_json(records: &[RepositoryRecord]) -> Result<String> {
    let entries = chart_entries(&sum_languages(records));
    let total: u64 = entries.iter().map(|e| e.value).sum();

    let value = json!({
        "repositories": records.len(),
        "total_bytes": total,
        "languages": entries,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
