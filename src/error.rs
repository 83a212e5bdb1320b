use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangLensError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to fetch {resource} from {url}: {reason}")]
    Fetch {
        resource: String,
        url: String,
        reason: String,
    },

    #[error("Unexpected data shape: {0}")]
    DataShape(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LangLensError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
