use std::time::Duration;

use rayon::prelude::*;

use crate::cli::{Cli, FetchArgs};
use crate::config::load_config;
use crate::github::{GitHubClient, HttpClient, ReqwestClient, RepositoryRecord, UserInfo};
use crate::progress::FetchProgress;
use crate::snapshot::save_records;
use crate::{EXIT_ERROR, EXIT_SUCCESS, LangLensError, Result};

#[must_use]
pub fn run_fetch(args: &FetchArgs, cli: &Cli) -> i32 {
    match run_fetch_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ERROR
        }
    }
}

/// Fetches the configured account's repositories into a snapshot file.
///
/// # Errors
/// Returns an error if no account is configured, a request fails, or
/// the snapshot cannot be written.
pub fn run_fetch_impl(args: &FetchArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    if config.api.user.is_empty() {
        return Err(LangLensError::Config(
            "no account configured: set `user` under [api] in .langlens.toml \
             or the LANGLENS_USER environment variable"
                .to_string(),
        ));
    }

    let http = ReqwestClient::new(
        config.api.token.clone(),
        Duration::from_secs(config.fetch.timeout_secs),
    );
    let client = GitHubClient::new(config.api.base_url, config.api.user, http);

    if cli.verbose > 0 {
        let user = client.get_user()?;
        eprintln!("{}", fetch_banner(&user));
    }

    let records = fetch_records(&client, args.no_languages, cli.quiet)?;
    save_records(&args.output, &records)?;

    if !cli.quiet {
        println!(
            "Saved {} repositories to {}",
            records.len(),
            args.output.display()
        );
    }
    Ok(())
}

/// Verbose-mode banner for the account being fetched. Prefers the
/// display name over the login when the profile carries one.
fn fetch_banner(user: &UserInfo) -> String {
    let who = user.name.as_deref().unwrap_or(&user.login);
    format!(
        "Fetching repositories for {who} ({} public)",
        user.public_repos
    )
}

/// Fetch the full snapshot: the repository list, then each repository's
/// language breakdown in parallel. Record order follows the listing
/// regardless of which language request finishes first.
///
/// # Errors
/// Returns the first fetch or data shape error encountered.
pub fn fetch_records<C>(
    client: &GitHubClient<C>,
    no_languages: bool,
    quiet: bool,
) -> Result<Vec<RepositoryRecord>>
where
    C: HttpClient + Sync,
{
    let repos = client.get_user_repos()?;

    if no_languages {
        return Ok(repos
            .into_iter()
            .map(|meta| RepositoryRecord::from_meta(meta, None))
            .collect());
    }

    let total = u64::try_from(repos.len()).unwrap_or(u64::MAX);
    let progress = FetchProgress::new(total, quiet);
    let records: Result<Vec<RepositoryRecord>> = repos
        .into_par_iter()
        .map(|meta| {
            let languages = client.get_repo_languages(&meta.name)?;
            progress.inc();
            Ok(RepositoryRecord::from_meta(meta, Some(languages)))
        })
        .collect();
    progress.finish();
    records
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod tests;
