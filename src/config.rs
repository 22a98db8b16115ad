// Runtime configuration.
// Resolves per-user filesystem locations once and threads them through
// resolution so components stay testable with injected paths.

use std::path::PathBuf;

use directories::{BaseDirs, ProjectDirs};

/// Name of the per-application directory under the OS cache root.
const CACHE_DIR_NAME: &str = "gitlab-reviewer";

/// Filename of the personal access token file under the home directory.
const TOKEN_FILE_NAME: &str = ".gitlab_pat";

/// Filesystem locations used during resolution.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding per-project member cache files.
    pub cache_root: PathBuf,
    /// Path to the GitLab personal access token file.
    pub token_path: PathBuf,
}

impl Config {
    /// Build the configuration from the environment.
    ///
    /// `GITLAB_REVIEWER_CACHE_DIR` and `GITLAB_REVIEWER_TOKEN_FILE`
    /// override the defaults. Otherwise the cache root is the platform
    /// cache directory (~/.cache on Linux), falling back to $HOME/.cache
    /// when it cannot be determined, and the token lives in the home
    /// directory.
    pub fn from_env() -> Self {
        let cache_root = std::env::var_os("GITLAB_REVIEWER_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                ProjectDirs::from("", "", CACHE_DIR_NAME)
                    .map(|dirs| dirs.cache_dir().to_path_buf())
                    .unwrap_or_else(|| home_dir().join(".cache").join(CACHE_DIR_NAME))
            });

        let token_path = std::env::var_os("GITLAB_REVIEWER_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir().join(TOKEN_FILE_NAME));

        Self {
            cache_root,
            token_path,
        }
    }
}

fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| {
            std::env::var_os("HOME")
                .map(PathBuf::from)
                .unwrap_or_default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_paths() {
        let config = Config::from_env();
        assert!(config.cache_root.ends_with(CACHE_DIR_NAME));
        assert!(config.token_path.ends_with(TOKEN_FILE_NAME));
    }
}
