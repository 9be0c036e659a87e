//! Branch ref creation.

use octocrab::params::repos::Reference;
use octocrab::Octocrab;
use tracing::debug;

use super::errors::GitHubError;

/// Handler for branch operations against a single repository.
#[derive(Debug, Clone)]
pub struct BranchHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl BranchHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Create `refs/heads/<branch>` pointing at `sha`.
    ///
    /// No existence check is made first; a branch of the same name
    /// surfaces as a host conflict error.
    pub async fn create_branch(&self, branch: &str, sha: &str) -> Result<(), GitHubError> {
        debug!(branch, sha, "creating branch ref");
        self.octocrab
            .repos(&self.owner, &self.repo)
            .create_ref(&Reference::Branch(branch.to_string()), sha)
            .await?;
        Ok(())
    }
}
