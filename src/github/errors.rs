//! Error types for GitHub host operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("release tag '{tag}' was not found")]
    TagNotFound { tag: String },
    #[error("GitHub API request failed: {0}")]
    Api(#[from] octocrab::Error),
    #[error("GitHub operation '{operation}' timed out after {duration_ms}ms")]
    Timeout {
        operation: &'static str,
        duration_ms: u64,
    },
}

/// True when the host answered 404 for the request.
pub(crate) fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(
        err,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}
