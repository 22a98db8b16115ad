// Cache path utilities.
// Derives a per-project cache file path from the remote URL.

use std::path::PathBuf;

use crate::config::Config;
use crate::remote::parse_remote;

/// Cache file path for the project behind `remote_url`.
///
/// A pure function of the remote URL: repeated runs against the same
/// repository address the same file. Unrecognized remotes fall back to a
/// sanitized transliteration of the raw URL so caching still works.
pub fn members_path(config: &Config, remote_url: &str) -> PathBuf {
    let stem = match parse_remote(remote_url) {
        // "researchable/general/my-project" -> "researchable-general-my-project"
        Ok(project) => project.path.replace('/', "-"),
        Err(_) => sanitize_url(remote_url),
    };
    config.cache_root.join(format!("{stem}.json"))
}

/// Flatten a raw URL into a filesystem-safe name.
fn sanitize_url(remote_url: &str) -> String {
    remote_url
        .chars()
        .map(|c| match c {
            '/' | ':' | '@' | '.' => '-',
            _ => c,
        })
        .collect()
}
