#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the langlens binary, isolated
/// from the caller's environment overrides.
#[macro_export]
macro_rules! langlens {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("langlens"));
        cmd.env_remove("LANGLENS_API_URL");
        cmd.env_remove("LANGLENS_USER");
        cmd.env_remove("LANGLENS_TOKEN");
        cmd
    }};
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a langlens config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".langlens.toml", content);
    }

    /// Creates a two-repository snapshot (`data.json`).
    pub fn create_snapshot(&self) {
        self.create_file("data.json", BASIC_SNAPSHOT);
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot with overlapping languages across two repositories.
pub const BASIC_SNAPSHOT: &str = r#"[
  {
    "name": "frontend-app",
    "description": "A web app",
    "languages": {"JavaScript": 52553, "CSS": 12000, "HTML": 4000},
    "updated_at": "2024-04-02T12:00:00Z",
    "visibility": "public"
  },
  {
    "name": "scripts",
    "languages": {"Python": 30000, "JavaScript": 2447},
    "updated_at": "2024-06-15T09:30:00Z",
    "visibility": "public"
  }
]"#;

/// Chart dataset in the `chartData.json` shape.
pub const BASIC_CHART_DATA: &str = r#"[
  {
    "chart": {
      "name": "Language Totals",
      "description": "Language byte totals across 2 repositories",
      "last_updated": "2024-06-15T09:30:00Z",
      "languages": [
        {"language": "JavaScript", "value": 55000},
        {"language": "Python", "value": 30000},
        {"language": "CSS", "value": 12000},
        {"language": "HTML", "value": 4000}
      ]
    }
  }
]"#;
