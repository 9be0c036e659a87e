pub mod branches;
pub mod client;
pub mod errors;
pub mod issues;
pub mod tags;

pub use client::{GitHubHost, ReleaseOps};
pub use errors::GitHubError;
pub use issues::CreatedIssue;
pub use tags::TagResolutionStrategy;
