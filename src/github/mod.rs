mod client;
mod model;

pub use client::{GitHubClient, HttpClient, ReqwestClient};
pub use model::{LanguageMap, RepoMeta, RepositoryRecord, UserInfo};
