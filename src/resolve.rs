// Resolution orchestrator.
// Sequences cache, API, stale cache, and git-log strategies into one
// fallback chain. First success wins; every discarded failure is logged.

use std::path::Path;

use tracing::{debug, warn};

use crate::cache;
use crate::config::Config;
use crate::error::{Result, ReviewerError};
use crate::git;
use crate::gitlab::{self, Member};
use crate::remote::parse_remote;

/// Resolve the member list for the current repository.
///
/// Never fails: when every strategy is exhausted the result is an empty
/// list, with the reasons already reported on the diagnostic stream.
/// `refresh` skips the fresh-cache strategy and goes straight to the API.
pub async fn resolve_members(config: &Config, refresh: bool) -> Vec<Member> {
    let remote_url = match git::origin_url() {
        Ok(url) => Some(url),
        Err(err) => {
            warn!("could not resolve origin remote: {err}");
            None
        }
    };
    resolve_chain(config, remote_url.as_deref(), refresh).await
}

/// Run the fallback chain for an already-resolved remote URL.
///
/// Without a remote there is no cache identity and no API target, so the
/// chain degenerates to the git-log strategy alone.
async fn resolve_chain(config: &Config, remote_url: Option<&str>, refresh: bool) -> Vec<Member> {
    if let Some(url) = remote_url {
        let cache_path = cache::members_path(config, url);

        if !refresh {
            match fresh_cache(&cache_path) {
                Ok(members) => return members,
                Err(err) => log_cache_miss("cache", &err),
            }
        }

        match live_api(config, url).await {
            Ok(members) => {
                if let Err(err) = cache::write(&cache_path, &members) {
                    warn!("could not write cache: {err}");
                }
                return members;
            }
            Err(err) => warn!("GitLab API failed: {err}"),
        }

        match stale_cache(&cache_path) {
            Ok(members) => {
                warn!("using stale cache");
                return members;
            }
            Err(err) => log_cache_miss("stale cache", &err),
        }
    }

    warn!("falling back to git log contributors (no GitLab usernames available)");
    match git::log_authors() {
        Ok(members) => members,
        Err(err) => {
            warn!("git log failed: {err}");
            Vec::new()
        }
    }
}

/// Strategy 1: cache file within its TTL window.
fn fresh_cache(path: &Path) -> Result<Vec<Member>> {
    cache::read(path, Some(cache::CACHE_TTL))
}

/// Strategy 2: live API fetch using the configured token.
async fn live_api(config: &Config, remote_url: &str) -> Result<Vec<Member>> {
    let project = parse_remote(remote_url)?;
    let token = gitlab::client::read_token(config)?;
    gitlab::fetch_members(&project, &token).await
}

/// Strategy 3: cache file regardless of age.
fn stale_cache(path: &Path) -> Result<Vec<Member>> {
    cache::read(path, None)
}

/// An absent cache file is the routine first-run case and stays quiet;
/// stale, empty, or corrupt files are surfaced at the default filter.
fn log_cache_miss(context: &str, err: &ReviewerError) {
    if is_absent(err) {
        debug!("{context} miss: {err}");
    } else {
        warn!("{context} unusable: {err}");
    }
}

fn is_absent(err: &ReviewerError) -> bool {
    matches!(err, ReviewerError::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};
    use tempfile::TempDir;

    const REMOTE: &str = "git@gitlab.invalid:group/project.git";

    fn test_config(dir: &TempDir) -> Config {
        Config {
            cache_root: dir.path().join("cache"),
            token_path: dir.path().join(".gitlab_pat"),
        }
    }

    fn sample_members() -> Vec<Member> {
        vec![Member {
            name: "Ann Example".to_string(),
            username: "ann".to_string(),
        }]
    }

    fn backdate(path: &Path, age: Duration) {
        let file = std::fs::OpenOptions::new().write(true).open(path).unwrap();
        file.set_modified(SystemTime::now() - age).unwrap();
    }

    #[test]
    fn test_fresh_cache_hit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        cache::write(&path, &sample_members()).unwrap();

        assert_eq!(fresh_cache(&path).unwrap(), sample_members());
    }

    #[test]
    fn test_stale_cache_ignores_age() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("project.json");
        cache::write(&path, &sample_members()).unwrap();
        backdate(&path, Duration::from_secs(25 * 60 * 60));

        assert!(matches!(fresh_cache(&path), Err(ReviewerError::CacheStale)));
        assert_eq!(stale_cache(&path).unwrap(), sample_members());
    }

    #[tokio::test]
    async fn test_chain_fresh_cache_short_circuits() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let path = cache::members_path(&config, REMOTE);
        cache::write(&path, &sample_members()).unwrap();

        // No token file exists, so any strategy past the fresh cache
        // would come back empty-usernamed or empty.
        let members = resolve_chain(&config, Some(REMOTE), false).await;
        assert_eq!(members, sample_members());
    }

    #[tokio::test]
    async fn test_chain_falls_through_to_stale_cache() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        let path = cache::members_path(&config, REMOTE);
        cache::write(&path, &sample_members()).unwrap();
        backdate(&path, Duration::from_secs(25 * 60 * 60));

        // Fresh cache rejects the old file, the API fails without a
        // token, and the stale strategy returns the same file.
        let members = resolve_chain(&config, Some(REMOTE), false).await;
        assert_eq!(members, sample_members());
    }

    #[tokio::test]
    async fn test_live_api_fails_without_token() {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);

        // The token file is missing, so the API strategy must fail
        // before any network traffic.
        let result = live_api(&config, REMOTE).await;
        assert!(matches!(result, Err(ReviewerError::MissingToken { .. })));
    }

    #[test]
    fn test_absent_miss_is_quiet_class() {
        let not_found =
            ReviewerError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(is_absent(&not_found));
        assert!(!is_absent(&ReviewerError::CacheStale));
        assert!(!is_absent(&ReviewerError::CacheEmpty));
    }
}
