//! Authenticated GitHub client for the hotfix cut.
//!
//! Repository coordinates are explicit constructor parameters threaded
//! from configuration; nothing here reads ambient process state.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use octocrab::Octocrab;

use super::branches::BranchHandler;
use super::errors::GitHubError;
use super::issues::{CreatedIssue, IssueHandler};
use super::tags::{TagHandler, TagResolutionStrategy};

/// Host operations consumed by the pipeline, as a trait so tests can
/// substitute in-memory fakes.
#[async_trait]
pub trait ReleaseOps: Send + Sync {
    /// Resolve an existing release tag to the commit SHA it points at.
    async fn resolve_tag_commit(&self, tag: &str) -> Result<String, GitHubError>;

    /// Create branch `refs/heads/<branch>` at `sha`.
    async fn create_branch(&self, branch: &str, sha: &str) -> Result<(), GitHubError>;

    /// Create an issue and return its canonical URL.
    async fn create_issue(
        &self,
        title: &str,
        labels: &[String],
        body: &str,
    ) -> Result<CreatedIssue, GitHubError>;
}

/// Production [`ReleaseOps`] implementation backed by octocrab.
#[derive(Debug, Clone)]
pub struct GitHubHost {
    tags: TagHandler,
    branches: BranchHandler,
    issues: IssueHandler,
    strategy: TagResolutionStrategy,
    timeout: Duration,
    owner: String,
    repo: String,
}

impl GitHubHost {
    pub fn new(
        token: String,
        owner: String,
        repo: String,
        strategy: TagResolutionStrategy,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder().personal_token(token).build()?;
        Ok(Self::from_octocrab(octocrab, owner, repo, strategy, timeout))
    }

    /// Build against a non-default API endpoint (tests, enterprise
    /// installs).
    pub fn with_base_uri(
        token: String,
        owner: String,
        repo: String,
        strategy: TagResolutionStrategy,
        timeout: Duration,
        base_uri: &str,
    ) -> Result<Self, GitHubError> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .base_uri(base_uri)?
            .build()?;
        Ok(Self::from_octocrab(octocrab, owner, repo, strategy, timeout))
    }

    fn from_octocrab(
        octocrab: Octocrab,
        owner: String,
        repo: String,
        strategy: TagResolutionStrategy,
        timeout: Duration,
    ) -> Self {
        Self {
            tags: TagHandler::new(octocrab.clone(), owner.clone(), repo.clone()),
            branches: BranchHandler::new(octocrab.clone(), owner.clone(), repo.clone()),
            issues: IssueHandler::new(octocrab, owner.clone(), repo.clone()),
            strategy,
            timeout,
            owner,
            repo,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Wrap a host call in the configured per-call timeout.
    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, GitHubError>
    where
        F: Future<Output = Result<T, GitHubError>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(GitHubError::Timeout {
                operation,
                duration_ms: self.timeout.as_millis() as u64,
            }),
        }
    }
}

#[async_trait]
impl ReleaseOps for GitHubHost {
    async fn resolve_tag_commit(&self, tag: &str) -> Result<String, GitHubError> {
        self.bounded("resolve_tag_commit", self.tags.resolve_commit(tag, self.strategy))
            .await
    }

    async fn create_branch(&self, branch: &str, sha: &str) -> Result<(), GitHubError> {
        self.bounded("create_branch", self.branches.create_branch(branch, sha))
            .await
    }

    async fn create_issue(
        &self,
        title: &str,
        labels: &[String],
        body: &str,
    ) -> Result<CreatedIssue, GitHubError> {
        self.bounded("create_issue", self.issues.create_issue(title, labels, body))
            .await
    }
}
