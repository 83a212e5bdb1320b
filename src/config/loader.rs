use std::fs;
use std::path::Path;

use crate::error::{LangLensError, Result};

use super::model::Config;

pub const DEFAULT_CONFIG_FILE: &str = ".langlens.toml";

/// Environment variables overriding file-based configuration.
const ENV_BASE_URL: &str = "LANGLENS_API_URL";
const ENV_USER: &str = "LANGLENS_USER";
const ENV_TOKEN: &str = "LANGLENS_TOKEN";

/// Load configuration from an explicit path or the default location,
/// then apply environment overrides.
///
/// An explicit path that does not exist is an error; a missing default
/// file silently yields `Config::default()`.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(explicit_path: Option<&Path>) -> Result<Config> {
    let mut config = match explicit_path {
        Some(path) => {
            if !path.exists() {
                return Err(LangLensError::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            read_config_file(path)?
        }
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                read_config_file(default)?
            } else {
                Config::default()
            }
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| LangLensError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Config::from_toml(&content)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(url) = std::env::var(ENV_BASE_URL)
        && !url.is_empty()
    {
        config.api.base_url = url;
    }
    if let Ok(user) = std::env::var(ENV_USER)
        && !user.is_empty()
    {
        config.api.user = user;
    }
    if let Ok(token) = std::env::var(ENV_TOKEN)
        && !token.is_empty()
    {
        config.api.token = Some(token);
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
