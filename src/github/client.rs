use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::error::{LangLensError, Result};

use super::model::{LanguageMap, RepoMeta, UserInfo};

/// Repositories returned per list request. The platform caps page size
/// at 100; accounts with more repositories are paged.
const REPOS_PER_PAGE: usize = 100;

/// HTTP client abstraction for dependency injection.
pub trait HttpClient {
    /// Perform a GET request and return the response body.
    fn get(&self, url: &str) -> Result<String>;
}

/// Production HTTP client using reqwest with bearer auth.
///
/// This implementation cannot be unit tested without a real HTTP server,
/// so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestClient {
    token: Option<String>,
    timeout: Duration,
}

impl ReqwestClient {
    #[must_use]
    pub const fn new(token: Option<String>, timeout: Duration) -> Self {
        Self { token, timeout }
    }
}

#[cfg(not(tarpaulin_include))]
impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("langlens/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LangLensError::Config(format!("Failed to create HTTP client: {e}")))?;

        let mut request = client
            .get(url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().map_err(|e| {
            let reason = if e.is_timeout() {
                "request timeout".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            fetch_error("resource", url, &reason)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error("resource", url, &format!("HTTP {status}")));
        }

        response
            .text()
            .map_err(|e| fetch_error("resource", url, &e.to_string()))
    }
}

fn fetch_error(resource: &str, url: &str, reason: &str) -> LangLensError {
    LangLensError::Fetch {
        resource: resource.to_string(),
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

/// Typed client for the hosted platform API.
///
/// Endpoint shapes follow the GitHub REST contract: `/users/{user}`,
/// `/users/{user}/repos`, `/repos/{user}/{repo}/languages`.
pub struct GitHubClient<C: HttpClient> {
    base_url: String,
    user: String,
    http: C,
}

impl<C: HttpClient> GitHubClient<C> {
    /// Create a client. A trailing slash on `base_url` is tolerated.
    pub fn new(base_url: impl Into<String>, user: impl Into<String>, http: C) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            user: user.into(),
            http,
        }
    }

    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Fetch the account profile.
    ///
    /// # Errors
    /// Returns a fetch error on transport/auth failure, or a data shape
    /// error if the response is not a user object.
    pub fn get_user(&self) -> Result<UserInfo> {
        let url = format!("{}/users/{}", self.base_url, self.user);
        self.get_typed("user", &url)
    }

    /// Fetch the account's repository list.
    ///
    /// # Errors
    /// Returns a fetch error on transport/auth failure, or a data shape
    /// error if the response is not a repository array.
    pub fn get_user_repos(&self) -> Result<Vec<RepoMeta>> {
        let mut repos: Vec<RepoMeta> = Vec::new();
        for page in 1.. {
            let url = format!(
                "{}/users/{}/repos?per_page={REPOS_PER_PAGE}&page={page}",
                self.base_url, self.user
            );
            let batch: Vec<RepoMeta> = self.get_typed("repositories", &url)?;
            let batch_len = batch.len();
            repos.extend(batch);
            if batch_len < REPOS_PER_PAGE {
                break;
            }
        }
        Ok(repos)
    }

    /// Fetch the per-language byte breakdown for one repository.
    ///
    /// # Errors
    /// Returns a fetch error on transport/auth failure, or a data shape
    /// error if the response is not a language map.
    pub fn get_repo_languages(&self, repo: &str) -> Result<LanguageMap> {
        let url = format!("{}/repos/{}/{repo}/languages", self.base_url, self.user);
        self.get_typed("languages", &url)
    }

    fn get_typed<T: DeserializeOwned>(&self, resource: &str, url: &str) -> Result<T> {
        let body = self.http.get(url).map_err(|e| match e {
            // Rewrite the placeholder resource from the transport layer
            LangLensError::Fetch { url, reason, .. } => LangLensError::Fetch {
                resource: resource.to_string(),
                url,
                reason,
            },
            other => other,
        })?;

        serde_json::from_str(&body).map_err(|e| {
            LangLensError::DataShape(format!("unexpected {resource} response from {url}: {e}"))
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
