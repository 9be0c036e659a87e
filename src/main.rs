use anyhow::Result;
use clap::Parser;

use hotfix_cutter::cli::commands::cut::CutCommand;
use hotfix_cutter::cli::{Cli, Commands};
use hotfix_cutter::config::HotfixConfig;
use hotfix_cutter::telemetry::init_telemetry;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = HotfixConfig::load()?;
    init_telemetry(&config.observability.log_level)?;

    match cli.command {
        // Default behavior: no subcommand - explain how to cut a hotfix
        None => {
            show_quick_start();
            Ok(())
        }
        Some(Commands::Cut {
            tag,
            strategy,
            dry_run,
        }) => tokio::runtime::Runtime::new()?.block_on(async {
            CutCommand::new(tag, strategy.map(Into::into), dry_run)
                .execute(&config)
                .await
        }),
    }
}

fn show_quick_start() {
    println!("✂️  Hotfix Cutter");
    println!();
    println!("🎯 QUICK START:");
    println!("   → Cut a hotfix: hotfix-cutter cut --tag v2.3.0");
    println!("   → Preview first: hotfix-cutter cut --tag v2.3.0 --dry-run");
    println!();
    println!("⚙️  CONFIGURATION:");
    println!("   → GitHub token: GITHUB_TOKEN or HOTFIX_CUTTER__GITHUB__TOKEN");
    println!("   → Repository: HOTFIX_CUTTER__GITHUB__OWNER and HOTFIX_CUTTER__GITHUB__REPO");
    println!("   → Team webhook: HOTFIX_CUTTER__SLACK__WEBHOOK_URL");
    println!("   → Or put the same keys in a hotfix-cutter.toml file");
}
