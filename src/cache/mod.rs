// Cache module for local filesystem caching.
// Stores resolved member lists per project for offline access.

pub mod paths;
pub mod store;

pub use paths::members_path;
pub use store::{CACHE_TTL, read, write};
