use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::github::TagResolutionStrategy;

/// A required input is absent or empty. Always fatal, and raised before
/// any network call is attempted.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("required configuration input '{0}' is missing or empty")]
    MissingInput(&'static str),
}

/// Main configuration structure for Hotfix Cutter
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HotfixConfig {
    /// GitHub configuration
    pub github: GitHubConfig,
    /// Team notification settings
    pub slack: SlackConfig,
    /// Pipeline behavior
    pub pipeline: PipelineConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// GitHub API token (can be set via env var)
    pub token: Option<String>,
    /// Repository owner
    pub owner: String,
    /// Repository name
    pub repo: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SlackConfig {
    /// Incoming webhook URL of the team channel
    pub webhook_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// How release tags are resolved to commits
    pub tag_strategy: TagResolutionStrategy,
    /// Bound on every external call
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level
    pub log_level: String,
}

impl Default for HotfixConfig {
    fn default() -> Self {
        Self {
            github: GitHubConfig {
                token: None, // Read from env var if not configured
                owner: String::new(),
                repo: String::new(),
            },
            slack: SlackConfig { webhook_url: None },
            pipeline: PipelineConfig {
                tag_strategy: TagResolutionStrategy::DirectRef,
                request_timeout_seconds: 8,
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
            },
        }
    }
}

/// Validated inputs the pipeline actually runs with. Producing this is
/// the up-front configuration check: every field is present and
/// non-empty.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub webhook_url: String,
    pub tag_strategy: TagResolutionStrategy,
    pub request_timeout: Duration,
}

impl HotfixConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration file (hotfix-cutter.toml)
    /// 3. Environment variables (prefixed with HOTFIX_CUTTER__)
    pub fn load() -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&HotfixConfig::default())?);

        if Path::new("hotfix-cutter.toml").exists() {
            builder = builder.add_source(File::with_name("hotfix-cutter"));
        }

        builder = builder.add_source(
            Environment::with_prefix("HOTFIX_CUTTER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut hotfix_config: HotfixConfig = config.try_deserialize()?;

        // The token is also accepted from the conventional env var
        if hotfix_config.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                hotfix_config.github.token = Some(token);
            }
        }

        Ok(hotfix_config)
    }

    /// Check every required input and hand back the validated settings.
    pub fn resolve(&self) -> Result<ResolvedSettings, ConfigurationError> {
        Ok(ResolvedSettings {
            token: require(self.github.token.as_deref(), "github.token")?,
            owner: require(Some(self.github.owner.as_str()), "github.owner")?,
            repo: require(Some(self.github.repo.as_str()), "github.repo")?,
            webhook_url: require(self.slack.webhook_url.as_deref(), "slack.webhook_url")?,
            tag_strategy: self.pipeline.tag_strategy,
            request_timeout: Duration::from_secs(self.pipeline.request_timeout_seconds),
        })
    }
}

fn require(value: Option<&str>, input: &'static str) -> Result<String, ConfigurationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(ConfigurationError::MissingInput(input)),
    }
}
