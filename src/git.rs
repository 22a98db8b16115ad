// Local git invocations.
// Shells out to the `git` CLI to read the origin remote and commit authors.

use std::process::Command;

use crate::error::{ReviewerError, Result};
use crate::gitlab::Member;

/// URL configured for the `origin` remote of the current repository.
pub fn origin_url() -> Result<String> {
    let output = run_git(&["remote", "get-url", "origin"])?;
    Ok(output.trim().to_string())
}

/// Members derived from commit authorship, in first-seen order.
///
/// Usernames are left empty: commit history carries display names only.
/// An empty history yields an empty list, not an error.
pub fn log_authors() -> Result<Vec<Member>> {
    let output = run_git(&["log", "--format=%aN"])?;
    Ok(dedup_authors(&output))
}

fn run_git(args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(ReviewerError::Git {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Deduplicate author names by exact match, preserving first-seen order.
fn dedup_authors(log_output: &str) -> Vec<Member> {
    let mut seen = std::collections::HashSet::new();
    log_output
        .lines()
        .map(str::trim)
        .filter(|name| !name.is_empty() && seen.insert(name.to_string()))
        .map(|name| Member {
            name: name.to_string(),
            username: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_first_seen_order() {
        let members = dedup_authors("Bob\nAnn\nBob\n");
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].name, "Bob");
        assert_eq!(members[1].name, "Ann");
        assert!(members.iter().all(|m| m.username.is_empty()));
    }

    #[test]
    fn test_dedup_skips_blank_lines() {
        let members = dedup_authors("\nAnn\n\n  \nBob\n");
        let names: Vec<_> = members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Ann", "Bob"]);
    }

    #[test]
    fn test_dedup_empty_history() {
        assert!(dedup_authors("").is_empty());
    }
}
