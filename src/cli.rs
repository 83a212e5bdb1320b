use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for the stats command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    /// Human-readable table
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "langlens")]
#[command(author, version, about = "Aggregate repository language data and render chart dashboards")]
#[command(long_about = "Fetches a user's repository metadata from a GitHub-compatible API,\n\
    aggregates per-language byte counts across repositories, and renders\n\
    the result as a single-page dashboard with SVG pie and bar charts.\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file (default: .langlens.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch repository metadata and language breakdowns into a snapshot
    Fetch(FetchArgs),

    /// Aggregate a repository snapshot into chart-ready language totals
    Sum(SumArgs),

    /// Render the chart dashboard as a self-contained HTML page
    Render(RenderArgs),

    /// Print aggregated language totals
    Stats(StatsArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct FetchArgs {
    /// Output path for the repository snapshot
    #[arg(short, long, default_value = "data.json")]
    pub output: PathBuf,

    /// Skip per-repository language breakdowns (metadata only)
    #[arg(long)]
    pub no_languages: bool,
}

#[derive(Parser, Debug)]
pub struct SumArgs {
    /// Path to the repository snapshot
    #[arg(short, long, default_value = "data.json")]
    pub data: PathBuf,

    /// Output path for the chart-ready dataset
    #[arg(short, long, default_value = "chartData.json")]
    pub output: PathBuf,

    /// Dataset name recorded in the output
    #[arg(long, default_value = "Language Totals")]
    pub name: String,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to the chart-ready dataset
    #[arg(long, default_value = "chartData.json")]
    pub chart_data: PathBuf,

    /// Aggregate this repository snapshot instead of reading --chart-data
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output path for the dashboard page
    #[arg(short, long, default_value = "dashboard.html")]
    pub output: PathBuf,

    /// Page title
    #[arg(long, default_value = "Repository Languages")]
    pub title: String,
}

#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Path to the repository snapshot
    #[arg(short, long, default_value = "data.json")]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: StatsFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".langlens.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
