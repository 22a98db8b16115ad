// GitLab API response types.
// Defines structs for deserializing the members/all response.

use serde::{Deserialize, Serialize};

/// A project member as resolved by this tool.
///
/// `username` is empty when the member was derived from commit history,
/// where no hosted identity is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub username: String,
}

/// A membership record from the GitLab API, including account state.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMember {
    pub name: String,
    pub username: String,
    pub state: String,
}

/// Keep only active members, projected down to [`Member`].
pub fn active_members(records: Vec<ApiMember>) -> Vec<Member> {
    records
        .into_iter()
        .filter(|record| record.state == "active")
        .map(|record| Member {
            name: record.name,
            username: record.username,
        })
        .collect()
}
