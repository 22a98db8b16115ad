// GitLab API HTTP client.
// Handles token loading, the members/all request, and response processing.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::{ReviewerError, Result};
use crate::remote::GitProject;

use super::types::{ApiMember, Member, active_members};

/// Maximum time to wait for the API before falling back.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Members per page. Only the first page is fetched; projects with more
/// than this many members are truncated (known limitation).
const PER_PAGE: u32 = 100;

/// How much of a non-200 response body to keep for diagnostics.
const BODY_PREVIEW_LEN: usize = 200;

/// Read the personal access token from the configured token file.
pub fn read_token(config: &Config) -> Result<String> {
    let path = config.token_path.display().to_string();
    let contents =
        std::fs::read_to_string(&config.token_path).map_err(|source| ReviewerError::MissingToken {
            path: path.clone(),
            source,
        })?;

    let token = contents.trim();
    if token.is_empty() {
        return Err(ReviewerError::EmptyToken { path });
    }
    Ok(token.to_string())
}

/// Fetch all active members of a project from the GitLab API.
///
/// Issues a single GET to `/api/v4/projects/{path}/members/all` with the
/// token in the `PRIVATE-TOKEN` header. Non-200 responses surface the
/// status code and a truncated body preview.
pub async fn fetch_members(project: &GitProject, token: &str) -> Result<Vec<Member>> {
    let url = members_url(project);

    let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
    let response = client
        .get(&url)
        .header("PRIVATE-TOKEN", token)
        .send()
        .await?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(ReviewerError::ApiStatus {
            status: status.as_u16(),
            preview: truncate_body(&body),
        });
    }

    let records: Vec<ApiMember> = response.json().await?;
    let members = active_members(records);
    if members.is_empty() {
        return Err(ReviewerError::NoActiveMembers);
    }
    Ok(members)
}

fn members_url(project: &GitProject) -> String {
    format!(
        "https://{}/api/v4/projects/{}/members/all?per_page={}",
        project.host,
        urlencoding::encode(&project.path),
        PER_PAGE
    )
}

/// Truncate an error body so HTML error pages do not flood the diagnostics.
fn truncate_body(body: &str) -> String {
    if body.len() > BODY_PREVIEW_LEN {
        let mut end = BODY_PREVIEW_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
