// Git remote URL parsing.
// Extracts the GitLab host and project path from SSH and HTTP(S) remotes.

use url::Url;

use crate::error::{ReviewerError, Result};

/// Host and project path parsed from a git remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitProject {
    /// e.g. "gitlab.com"
    pub host: String,
    /// e.g. "researchable/myproject"
    pub path: String,
}

/// Parse a git remote URL into a [`GitProject`].
///
/// Supports both common remote shapes:
///
///   git@gitlab.com:group/project.git
///   https://gitlab.com/group/project.git
///
/// The trailing `.git` suffix is stripped at most once. Anything else is
/// rejected with [`ReviewerError::UnrecognizedRemote`].
pub fn parse_remote(remote_url: &str) -> Result<GitProject> {
    if let Some(project) = parse_ssh(remote_url) {
        return Ok(project);
    }
    if let Some(project) = parse_http(remote_url) {
        return Ok(project);
    }
    Err(ReviewerError::UnrecognizedRemote(remote_url.to_string()))
}

/// Match the SSH shape `user@host:path`.
fn parse_ssh(remote_url: &str) -> Option<GitProject> {
    let (user_host, path) = remote_url.split_once(':')?;
    let (_, host) = user_host.split_once('@')?;
    let path = path.strip_suffix(".git").unwrap_or(path);
    if host.is_empty() || path.is_empty() {
        return None;
    }
    Some(GitProject {
        host: host.to_string(),
        path: path.to_string(),
    })
}

/// Match the HTTP(S) shape `scheme://host/path`.
fn parse_http(remote_url: &str) -> Option<GitProject> {
    let url = Url::parse(remote_url).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    let path = url.path().trim_start_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    Some(GitProject {
        host: host.to_string(),
        path: path.to_string(),
    })
}
