//! Tracking issue creation.

use octocrab::Octocrab;
use tracing::debug;

use super::errors::GitHubError;

/// The slice of a created issue the rest of the pipeline cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedIssue {
    pub number: u64,
    pub url: String,
}

/// Handler for issue operations against a single repository.
#[derive(Debug, Clone)]
pub struct IssueHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl IssueHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Create a new issue and return its canonical URL.
    ///
    /// One-shot creation: no check for an existing open issue with the
    /// same title, so re-running for the same inputs creates a
    /// duplicate.
    pub async fn create_issue(
        &self,
        title: &str,
        labels: &[String],
        body: &str,
    ) -> Result<CreatedIssue, GitHubError> {
        debug!(title, "creating tracking issue");
        let issue = self
            .octocrab
            .issues(&self.owner, &self.repo)
            .create(title)
            .body(body)
            .labels(labels.to_vec())
            .send()
            .await
            .map_err(GitHubError::Api)?;

        Ok(CreatedIssue {
            number: issue.number,
            url: issue.html_url.to_string(),
        })
    }
}
