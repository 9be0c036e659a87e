//! The hotfix cut pipeline.
//!
//! Three stateless steps run strictly in order, each consuming the
//! previous step's output: resolve the tag and create the branch, open
//! the tracking issue, announce it. Control flows forward only.

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use crate::github::{CreatedIssue, GitHubError, ReleaseOps};
use crate::release;
use crate::slack::{DeliveryError, Notify, WebhookPayload};
use crate::telemetry::generate_correlation_id;

#[derive(Debug, Error)]
pub enum HotfixError {
    #[error(transparent)]
    Host(#[from] GitHubError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Everything a completed cut produced.
#[derive(Debug, Clone)]
pub struct HotfixOutcome {
    pub release_tag: String,
    pub hotfix_tag: String,
    pub branch: String,
    pub commit: String,
    pub issue: CreatedIssue,
}

/// One-shot orchestrator over the injected host and notifier.
pub struct HotfixPipeline<'a> {
    host: &'a dyn ReleaseOps,
    notifier: &'a dyn Notify,
}

impl<'a> HotfixPipeline<'a> {
    pub fn new(host: &'a dyn ReleaseOps, notifier: &'a dyn Notify) -> Self {
        Self { host, notifier }
    }

    /// Run the cut for one release tag.
    ///
    /// Fail-fast with no compensation: the first error aborts the
    /// remaining steps, and every artifact already created stays in
    /// place. Nothing is retried.
    pub async fn run(&self, release_tag: &str) -> Result<HotfixOutcome, HotfixError> {
        let correlation_id = generate_correlation_id();
        let span = info_span!(
            "hotfix_cut",
            release.tag = release_tag,
            correlation.id = %correlation_id,
        );
        self.run_inner(release_tag).instrument(span).await
    }

    async fn run_inner(&self, release_tag: &str) -> Result<HotfixOutcome, HotfixError> {
        let hotfix_tag = release::hotfix_tag(release_tag);
        let branch = release::hotfix_branch(release_tag);

        let commit = self.host.resolve_tag_commit(release_tag).await?;
        info!(commit = %commit, "resolved release tag");

        self.host.create_branch(&branch, &commit).await?;
        info!(branch = %branch, "created hotfix branch");

        let issue = self
            .host
            .create_issue(
                &release::issue_title(release_tag),
                &[release::TRACKING_LABEL.to_string()],
                &release::issue_body(release_tag, &hotfix_tag),
            )
            .await?;
        info!(issue.url = %issue.url, "created tracking issue");

        let payload = WebhookPayload::hotfix_created(release_tag, &hotfix_tag, &issue.url);
        self.notifier.post(&payload).await?;
        info!("notification delivered");

        Ok(HotfixOutcome {
            release_tag: release_tag.to_string(),
            hotfix_tag,
            branch,
            commit,
            issue,
        })
    }
}
