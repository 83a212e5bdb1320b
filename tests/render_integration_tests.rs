use predicates::prelude::*;

mod common;
use common::TestFixture;

#[test]
fn render_produces_a_dashboard_from_chart_data() {
    let fixture = TestFixture::new();
    fixture.create_file("chartData.json", common::BASIC_CHART_DATA);

    langlens!()
        .current_dir(fixture.path())
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard.html"));

    let html = std::fs::read_to_string(fixture.path().join("dashboard.html")).unwrap();
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains("Repository Languages"));
    assert!(html.contains("JavaScript"));
    assert!(html.contains(r#"id="pie-frontend""#));
    assert!(html.contains(r#"class="bar""#));
}

#[test]
fn render_aggregates_a_snapshot_directly() {
    let fixture = TestFixture::new();
    fixture.create_snapshot();

    langlens!()
        .current_dir(fixture.path())
        .args(["render", "--data", "data.json", "--title", "Byte Census"])
        .assert()
        .success();

    let html = std::fs::read_to_string(fixture.path().join("dashboard.html")).unwrap();
    assert!(html.contains("<h1>Byte Census</h1>"));
    assert!(html.contains("Python"));
    assert!(html.contains("2024-06-15T09:30:00Z"));
}

#[test]
fn render_without_input_writes_an_empty_dashboard() {
    let fixture = TestFixture::new();

    langlens!()
        .current_dir(fixture.path())
        .arg("render")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"));

    let html = std::fs::read_to_string(fixture.path().join("dashboard.html")).unwrap();
    assert!(html.contains("No language data"));
}

#[test]
fn sum_then_render_chains_through_chart_data() {
    let fixture = TestFixture::new();
    fixture.create_snapshot();

    langlens!()
        .current_dir(fixture.path())
        .args(["--quiet", "sum"])
        .assert()
        .success();
    langlens!()
        .current_dir(fixture.path())
        .args(["--quiet", "render"])
        .assert()
        .success();

    let html = std::fs::read_to_string(fixture.path().join("dashboard.html")).unwrap();
    // grouped tooltip value for the summed JavaScript total
    assert!(html.contains("55.000"));
}

#[test]
fn render_to_an_unwritable_path_is_an_error() {
    let fixture = TestFixture::new();
    fixture.create_file("chartData.json", common::BASIC_CHART_DATA);

    langlens!()
        .current_dir(fixture.path())
        .args(["render", "--output", "missing-dir/dashboard.html"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}
