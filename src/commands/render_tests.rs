use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::RenderArgs;

fn quiet_cli() -> Cli {
    Cli::parse_from(["langlens", "--quiet", "render"])
}

fn args(dir: &TempDir) -> RenderArgs {
    RenderArgs {
        chart_data: dir.path().join("chartData.json"),
        data: None,
        output: dir.path().join("dashboard.html"),
        title: "My Languages".to_string(),
    }
}

#[test]
fn renders_from_chart_dataset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("chartData.json"),
        r#"[{"chart": {"name": "t", "languages": [{"language": "Rust", "value": 7}]}}]"#,
    )
    .unwrap();
    let args = args(&dir);

    run_render_impl(&args, &quiet_cli()).unwrap();

    let html = std::fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("<h1>My Languages</h1>"));
    assert!(html.contains("Rust"));
}

#[test]
fn renders_straight_from_a_snapshot() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("data.json"),
        r#"[{"name": "a", "languages": {"Python": 10}}]"#,
    )
    .unwrap();
    let mut args = args(&dir);
    args.data = Some(dir.path().join("data.json"));

    run_render_impl(&args, &quiet_cli()).unwrap();

    let html = std::fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("Python"));
}

#[test]
fn missing_input_renders_the_empty_state() {
    let dir = TempDir::new().unwrap();
    let args = args(&dir);

    run_render_impl(&args, &quiet_cli()).unwrap();

    let html = std::fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("No language data"));
}

#[test]
fn malformed_dataset_renders_the_empty_state() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("chartData.json"), "not json").unwrap();
    let args = args(&dir);

    assert_eq!(run_render(&args, &quiet_cli()), crate::EXIT_SUCCESS);
    let html = std::fs::read_to_string(&args.output).unwrap();
    assert!(html.contains("No language data"));
}
