use crate::aggregate::{aggregate_dataset, latest_update};
use crate::cli::{Cli, SumArgs};
use crate::snapshot::{load_records, save_chart_dataset};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_sum(args: &SumArgs, cli: &Cli) -> i32 {
    match run_sum_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Aggregates a repository snapshot into a chart-ready dataset file.
///
/// # Errors
/// Returns an error if the snapshot is unreadable, malformed, or the
/// output cannot be written.
pub fn run_sum_impl(args: &SumArgs, cli: &Cli) -> Result<()> {
    let records = load_records(&args.data)?;
    let dataset = aggregate_dataset(&records, &args.name, latest_update(&records));

    save_chart_dataset(&args.output, &dataset)?;

    if !cli.quiet {
        println!(
            "Aggregated {} repositories into {} languages: {}",
            records.len(),
            dataset.languages.len(),
            args.output.display()
        );
    }
    Ok(())
}

#[cfg(test)]
#[path = "sum_tests.rs"]
mod tests;
