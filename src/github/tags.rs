//! Release tag resolution.
//!
//! Two strategies resolve a tag name to the commit it points at. Direct
//! ref lookup is one request and is the default; enumeration exists for
//! hosts whose ref-lookup endpoint is unreliable and walks the full tag
//! list instead.

use octocrab::params::repos::Reference;
use octocrab::models::repos::Object;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::errors::{is_not_found, GitHubError};

/// How a release tag is resolved to a commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagResolutionStrategy {
    /// Look the tag ref up directly. One request.
    #[default]
    DirectRef,
    /// List every tag and search for an exact name match. Fallback
    /// policy for hosts that do not expose direct tag-ref lookup
    /// reliably.
    EnumerateTags,
}

/// Handler for tag resolution against a single repository.
#[derive(Debug, Clone)]
pub struct TagHandler {
    octocrab: Octocrab,
    owner: String,
    repo: String,
}

impl TagHandler {
    pub fn new(octocrab: Octocrab, owner: String, repo: String) -> Self {
        Self {
            octocrab,
            owner,
            repo,
        }
    }

    /// Resolve a release tag to its commit SHA using the given strategy.
    pub async fn resolve_commit(
        &self,
        tag: &str,
        strategy: TagResolutionStrategy,
    ) -> Result<String, GitHubError> {
        match strategy {
            TagResolutionStrategy::DirectRef => self.resolve_by_ref(tag).await,
            TagResolutionStrategy::EnumerateTags => self.resolve_by_listing(tag).await,
        }
    }

    async fn resolve_by_ref(&self, tag: &str) -> Result<String, GitHubError> {
        debug!(tag, "resolving release tag via direct ref lookup");
        let reference = self
            .octocrab
            .repos(&self.owner, &self.repo)
            .get_ref(&Reference::Tag(tag.to_string()))
            .await;

        match reference {
            Ok(r) => match r.object {
                Object::Commit { sha, .. } => Ok(sha),
                // Annotated tags point at a tag object; the host resolves
                // it the rest of the way when the branch is created.
                Object::Tag { sha, .. } => Ok(sha),
                _ => Err(GitHubError::TagNotFound {
                    tag: tag.to_string(),
                }),
            },
            Err(e) if is_not_found(&e) => Err(GitHubError::TagNotFound {
                tag: tag.to_string(),
            }),
            Err(e) => Err(GitHubError::Api(e)),
        }
    }

    async fn resolve_by_listing(&self, tag: &str) -> Result<String, GitHubError> {
        debug!(tag, "resolving release tag via tag enumeration");
        let page = self
            .octocrab
            .repos(&self.owner, &self.repo)
            .list_tags()
            .per_page(100)
            .send()
            .await?;
        let tags = self.octocrab.all_pages(page).await?;

        tags.into_iter()
            .find(|t| t.name == tag)
            .map(|t| t.commit.sha)
            .ok_or_else(|| GitHubError::TagNotFound {
                tag: tag.to_string(),
            })
    }
}
