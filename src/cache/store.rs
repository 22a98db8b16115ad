// Cache store for reading and writing member lists.
// Handles JSON serialization, mtime-based TTL checking, and filesystem
// operations.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{ReviewerError, Result};
use crate::gitlab::Member;

/// How long a cache file stays fresh: 24 hours.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Read a cached member list.
///
/// With `max_age = Some(ttl)`, a file whose modification time is older
/// than `ttl` fails with [`ReviewerError::CacheStale`] even if its content
/// is valid; `None` skips the age check. A deserialized empty list fails
/// with [`ReviewerError::CacheEmpty`] so callers fall through to a fetch.
pub fn read(path: &Path, max_age: Option<Duration>) -> Result<Vec<Member>> {
    if let Some(ttl) = max_age {
        let modified = fs::metadata(path)?.modified()?;
        let age = modified.elapsed().unwrap_or(Duration::MAX);
        if age > ttl {
            return Err(ReviewerError::CacheStale);
        }
    }

    let contents = fs::read_to_string(path)?;
    let members: Vec<Member> = serde_json::from_str(&contents)?;

    if members.is_empty() {
        return Err(ReviewerError::CacheEmpty);
    }
    Ok(members)
}

/// Write a member list to the cache as pretty-printed JSON.
///
/// Creates parent directories as needed. Truncate+write is good enough
/// here; a torn write just means a corrupt cache entry, which the next
/// read treats as a miss.
pub fn write(path: &Path, members: &[Member]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(members)?;
    fs::write(path, json)?;
    Ok(())
}
