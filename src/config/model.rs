use serde::{Deserialize, Serialize};

/// Platform API credentials and endpoint. Read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the GitHub-compatible API.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Account whose repositories are aggregated.
    #[serde(default)]
    pub user: String,

    /// Bearer token passed through on every request. Optional for
    /// public data, required to see private repositories.
    #[serde(default)]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user: String::new(),
            token: None,
        }
    }
}

/// Fetch behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FetchConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub fetch: FetchConfig,
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed.
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

fn default_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# langlens configuration file

[api]
# Base URL of the GitHub-compatible API
base_url = "https://api.github.com"

# Account whose repositories are aggregated
user = ""

# Bearer token (optional for public data)
# token = "ghp_..."

[fetch]
# Per-request timeout in seconds (default: 30)
timeout_secs = 30
"#
    .to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
