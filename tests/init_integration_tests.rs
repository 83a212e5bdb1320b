use predicates::prelude::*;

mod common;
use common::TestFixture;

#[test]
fn init_creates_a_parseable_config() {
    let fixture = TestFixture::new();

    langlens!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".langlens.toml"));

    let content = std::fs::read_to_string(fixture.path().join(".langlens.toml")).unwrap();
    let parsed: toml::Value = toml::from_str(&content).unwrap();
    assert!(parsed.get("api").is_some());
    assert!(parsed.get("fetch").is_some());
}

#[test]
fn init_refuses_an_existing_file() {
    let fixture = TestFixture::new();
    fixture.create_config("# mine");

    langlens!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites() {
    let fixture = TestFixture::new();
    fixture.create_config("# stale");

    langlens!()
        .current_dir(fixture.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = std::fs::read_to_string(fixture.path().join(".langlens.toml")).unwrap();
    assert!(content.contains("[api]"));
}

#[test]
fn init_custom_output_path() {
    let fixture = TestFixture::new();

    langlens!()
        .current_dir(fixture.path())
        .args(["init", "--output", "custom.toml"])
        .assert()
        .success();

    assert!(fixture.path().join("custom.toml").exists());
}
