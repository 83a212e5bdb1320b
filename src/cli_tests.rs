use std::path::PathBuf;

use super::*;

#[test]
fn cli_fetch_default_output() {
    let cli = Cli::parse_from(["langlens", "fetch"]);
    match cli.command {
        Commands::Fetch(args) => {
            assert_eq!(args.output, PathBuf::from("data.json"));
            assert!(!args.no_languages);
        }
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn cli_fetch_no_languages() {
    let cli = Cli::parse_from(["langlens", "fetch", "--no-languages"]);
    match cli.command {
        Commands::Fetch(args) => assert!(args.no_languages),
        _ => panic!("Expected Fetch command"),
    }
}

#[test]
fn cli_sum_defaults() {
    let cli = Cli::parse_from(["langlens", "sum"]);
    match cli.command {
        Commands::Sum(args) => {
            assert_eq!(args.data, PathBuf::from("data.json"));
            assert_eq!(args.output, PathBuf::from("chartData.json"));
            assert_eq!(args.name, "Language Totals");
        }
        _ => panic!("Expected Sum command"),
    }
}

#[test]
fn cli_render_defaults_to_chart_data() {
    let cli = Cli::parse_from(["langlens", "render"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.chart_data, PathBuf::from("chartData.json"));
            assert_eq!(args.data, None);
            assert_eq!(args.output, PathBuf::from("dashboard.html"));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_render_with_raw_snapshot() {
    let cli = Cli::parse_from(["langlens", "render", "--data", "repos.json"]);
    match cli.command {
        Commands::Render(args) => {
            assert_eq!(args.data, Some(PathBuf::from("repos.json")));
        }
        _ => panic!("Expected Render command"),
    }
}

#[test]
fn cli_stats_with_format() {
    let cli = Cli::parse_from(["langlens", "stats", "--format", "json"]);
    match cli.command {
        Commands::Stats(args) => assert_eq!(args.format, StatsFormat::Json),
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn cli_global_config_flag() {
    let cli = Cli::parse_from(["langlens", "--config", "custom.toml", "stats"]);
    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["langlens", "-vv", "fetch"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_init_force() {
    let cli = Cli::parse_from(["langlens", "init", "--force"]);
    match cli.command {
        Commands::Init(args) => {
            assert!(args.force);
            assert_eq!(args.output, PathBuf::from(".langlens.toml"));
        }
        _ => panic!("Expected Init command"),
    }
}
