// Hotfix Cutter - release tag hotfix automation
// This exposes the core components for testing and integration

pub mod cli;
pub mod config;
pub mod github;
pub mod release;
pub mod slack;
pub mod telemetry;
pub mod workflows;

// Re-export key types for easy access
pub use config::{ConfigurationError, HotfixConfig, ResolvedSettings};
pub use github::{CreatedIssue, GitHubError, GitHubHost, ReleaseOps, TagResolutionStrategy};
pub use slack::{DeliveryError, Notify, SlackNotifier, WebhookPayload};
pub use telemetry::{generate_correlation_id, init_telemetry};
pub use workflows::{HotfixError, HotfixOutcome, HotfixPipeline};
