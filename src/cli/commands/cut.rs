use anyhow::Result;

use crate::config::HotfixConfig;
use crate::github::{GitHubError, GitHubHost, TagResolutionStrategy};
use crate::release;
use crate::slack::{SlackNotifier, WebhookPayload};
use crate::workflows::{HotfixError, HotfixPipeline};

pub struct CutCommand {
    pub tag: String,
    pub strategy: Option<TagResolutionStrategy>,
    pub dry_run: bool,
}

impl CutCommand {
    pub fn new(tag: String, strategy: Option<TagResolutionStrategy>, dry_run: bool) -> Self {
        Self {
            tag,
            strategy,
            dry_run,
        }
    }

    pub async fn execute(&self, config: &HotfixConfig) -> Result<()> {
        if self.dry_run {
            return self.preview();
        }

        // Required inputs are checked before any network call.
        let settings = config.resolve()?;
        let strategy = self.strategy.unwrap_or(settings.tag_strategy);

        println!("✂️  Cutting hotfix for {}", self.tag);
        print!("🔄 Connecting to GitHub... ");
        std::io::Write::flush(&mut std::io::stdout()).ok();

        let host = GitHubHost::new(
            settings.token.clone(),
            settings.owner.clone(),
            settings.repo.clone(),
            strategy,
            settings.request_timeout,
        )?;
        let notifier = SlackNotifier::new(settings.webhook_url.clone(), settings.request_timeout)?;
        println!("✅");

        let pipeline = HotfixPipeline::new(&host, &notifier);
        match pipeline.run(&self.tag).await {
            Ok(outcome) => {
                println!();
                println!(
                    "✅ Hotfix cut complete for {}/{}:",
                    host.owner(),
                    host.repo()
                );
                println!(
                    "   🌿 Branch: {} (at {})",
                    outcome.branch,
                    short_sha(&outcome.commit)
                );
                println!("   📋 Tracking issue: {}", outcome.issue.url);
                println!(
                    "   📣 Team notified via {}",
                    webhook_host(&settings.webhook_url)
                );
                println!();
                println!(
                    "Next: commit fixes to {} and track approval on the issue",
                    outcome.branch
                );
                Ok(())
            }
            Err(e) => {
                println!();
                println!("❌ Hotfix cut failed: {e}");
                print_troubleshooting(&e);
                Err(e.into())
            }
        }
    }

    /// Print the derived names and payloads without touching any
    /// external system.
    fn preview(&self) -> Result<()> {
        let hotfix_tag = release::hotfix_tag(&self.tag);
        let payload =
            WebhookPayload::hotfix_created(&self.tag, &hotfix_tag, "<tracking issue url>");

        println!("🔍 DRY RUN - would cut hotfix for {}:", self.tag);
        println!("   🌿 Branch ref: {}", release::hotfix_branch_ref(&self.tag));
        println!(
            "   📋 Issue: '{}' with label '{}'",
            release::issue_title(&self.tag),
            release::TRACKING_LABEL
        );
        println!();
        println!("{}", release::issue_body(&self.tag, &hotfix_tag));
        println!();
        println!("   📣 Notification payload:");
        println!("{}", serde_json::to_string_pretty(&payload)?);
        println!();
        println!("📝 No changes were made");
        Ok(())
    }
}

fn short_sha(sha: &str) -> &str {
    &sha[..sha.len().min(7)]
}

fn webhook_host(webhook_url: &str) -> String {
    // The path component of a webhook URL is a secret; only the host is
    // safe to echo back.
    reqwest::Url::parse(webhook_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| "webhook".to_string())
}

fn print_troubleshooting(error: &HotfixError) {
    match error {
        HotfixError::Host(GitHubError::TagNotFound { tag }) => {
            println!();
            println!("🎯 TAG HELP:");
            println!("   → Tag '{tag}' must already be published before a hotfix can be cut");
            println!("   → List local tags: git tag --list");
            println!("   → List host tags: gh api repos/{{owner}}/{{repo}}/tags");
        }
        HotfixError::Host(_) => {
            println!();
            println!("🔧 TROUBLESHOOTING:");
            println!("   → Check authentication: gh auth status");
            println!("   → Verify repository access: gh repo view");
            println!("   → A branch named hotfix/<tag> may already exist from a previous run");
        }
        HotfixError::Delivery(_) => {
            println!();
            println!("🔧 TROUBLESHOOTING:");
            println!("   → The branch and tracking issue were created and stay in place");
            println!("   → Check the webhook URL in configuration");
            println!("   → Re-announce manually once the channel endpoint is reachable");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_sha_truncates_to_seven() {
        assert_eq!(short_sha("0123456789abcdef"), "0123456");
        assert_eq!(short_sha("abc"), "abc");
    }

    #[test]
    fn test_webhook_host_hides_the_secret_path() {
        let display = webhook_host("https://hooks.slack.com/services/T0/B0/secret");
        assert_eq!(display, "hooks.slack.com");
        assert!(!display.contains("secret"));
    }
}
