use predicates::prelude::*;

mod common;
use common::TestFixture;

#[test]
fn help_lists_subcommands() {
    langlens!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fetch"))
        .stdout(predicate::str::contains("sum"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("stats"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn version_prints_crate_version() {
    langlens!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_subcommand_fails() {
    langlens!().arg("explode").assert().failure();
}

#[test]
fn missing_subcommand_shows_usage() {
    langlens!()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn explicit_missing_config_is_an_error() {
    let fixture = TestFixture::new();

    langlens!()
        .current_dir(fixture.path())
        .args(["--config", "nope.toml", "fetch"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn fetch_without_a_configured_user_is_an_error() {
    let fixture = TestFixture::new();

    langlens!()
        .current_dir(fixture.path())
        .arg("fetch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no account configured"));
}

#[test]
fn env_override_reaches_the_fetch_client() {
    let fixture = TestFixture::new();

    // An unroutable base URL proves both overrides are honored: the
    // failure names the overridden endpoint, not api.github.com.
    langlens!()
        .current_dir(fixture.path())
        .env("LANGLENS_USER", "octocat")
        .env("LANGLENS_API_URL", "http://127.0.0.1:1")
        .arg("fetch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("127.0.0.1:1"))
        .stderr(predicate::str::contains("octocat"));
}

#[test]
fn malformed_config_file_is_reported() {
    let fixture = TestFixture::new();
    fixture.create_config("this is not toml ===");

    langlens!()
        .current_dir(fixture.path())
        .arg("fetch")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}
