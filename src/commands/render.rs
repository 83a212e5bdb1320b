use std::fs;

use crate::aggregate::{aggregate_dataset, latest_update};
use crate::cli::{Cli, RenderArgs};
use crate::page::DashboardPage;
use crate::snapshot::{ChartDataset, load_chart_dataset, load_records};
use crate::{EXIT_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_render(args: &RenderArgs, cli: &Cli) -> i32 {
    match run_render_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Renders the dashboard page.
///
/// A missing or malformed input file is reported as a warning and the
/// page is rendered in its empty state; only a write failure is an
/// error.
///
/// # Errors
/// Returns an error if the output file cannot be written.
pub fn run_render_impl(args: &RenderArgs, cli: &Cli) -> Result<()> {
    let dataset = load_dataset(args);
    let page = DashboardPage::new(&args.title, dataset);

    fs::write(&args.output, page.render())?;

    if !cli.quiet {
        println!("Wrote dashboard to {}", args.output.display());
    }
    Ok(())
}

fn load_dataset(args: &RenderArgs) -> ChartDataset {
    let loaded = match &args.data {
        Some(path) => load_records(path).map(|records| {
            let last_updated = latest_update(&records);
            aggregate_dataset(&records, "Language Totals", last_updated)
        }),
        None => load_chart_dataset(&args.chart_data),
    };

    match loaded {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!("Warning: {e}; rendering an empty dashboard");
            ChartDataset::default()
        }
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
