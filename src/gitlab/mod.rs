// GitLab API module.
// Provides client and types for the GitLab REST v4 members endpoint.

pub mod client;
pub mod types;

pub use client::fetch_members;
pub use types::Member;
