//! Wire models for the hosted platform API and the repository snapshot.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Language name -> byte count, in platform-reported order.
///
/// Values are `u64`: a negative byte count in the input is rejected at
/// deserialization rather than clamped.
pub type LanguageMap = IndexMap<String, u64>;

/// Account profile from `/users/{user}`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub public_repos: u64,
}

/// Repository metadata from `/users/{user}/repos`, trimmed to the
/// fields the snapshot keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoMeta {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
}

/// One repository in the `data.json` snapshot: metadata plus the
/// per-language byte map. `languages` stays optional — a record without
/// it is skipped by the aggregator, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryRecord {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub languages: Option<LanguageMap>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl RepositoryRecord {
    /// Assemble a snapshot record from repository metadata and an
    /// optionally fetched language breakdown.
    #[must_use]
    pub fn from_meta(meta: RepoMeta, languages: Option<LanguageMap>) -> Self {
        Self {
            name: meta.name,
            description: meta.description,
            languages,
            created_at: meta.created_at,
            updated_at: meta.updated_at,
            visibility: meta.visibility,
            url: meta.html_url,
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
