// CLI argument definitions.

use clap::Parser;

/// Resolve the member list of the GitLab project behind the origin remote.
#[derive(Debug, Parser)]
#[command(name = "gitlab-reviewer", version)]
pub struct Cli {
    /// Force refresh the cache from the GitLab API.
    #[arg(long)]
    pub refresh: bool,

    /// Output as JSON instead of TSV.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["gitlab-reviewer"]);
        assert!(!cli.refresh);
        assert!(!cli.json);
    }

    #[test]
    fn test_both_flags() {
        let cli = Cli::parse_from(["gitlab-reviewer", "--refresh", "--json"]);
        assert!(cli.refresh);
        assert!(cli.json);
    }

    #[test]
    fn test_rejects_positional_args() {
        assert!(Cli::try_parse_from(["gitlab-reviewer", "extra"]).is_err());
    }
}
