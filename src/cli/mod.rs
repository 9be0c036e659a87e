use clap::{Parser, Subcommand, ValueEnum};

pub mod commands;

use crate::github::TagResolutionStrategy;

#[derive(Parser)]
#[command(name = "hotfix-cutter")]
#[command(about = "Cut hotfix branches from release tags with tracking issue and team notification")]
#[command(long_about = "Hotfix Cutter materializes a maintenance branch rooted at a published \
                       release tag, opens the governance tracking issue, and notifies the team \
                       channel. Get started with 'hotfix-cutter cut --tag <tag>'.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cut a hotfix from a published release tag (branch, tracking issue, notification)
    Cut {
        /// Release tag to root the hotfix branch at
        #[arg(long, help = "Existing release tag, e.g. v2.3.0")]
        tag: String,
        /// Override the configured tag resolution strategy
        #[arg(
            long,
            value_enum,
            help = "Resolve the tag via a direct ref lookup or by enumerating all tags"
        )]
        strategy: Option<StrategyArg>,
        /// Show what would be created without making changes
        #[arg(long, help = "Show what would be created without making changes")]
        dry_run: bool,
    },
}

/// CLI spelling of the tag resolution strategy.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StrategyArg {
    /// Single ref lookup (preferred)
    Direct,
    /// List all tags and match by name
    Enumerate,
}

impl From<StrategyArg> for TagResolutionStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Direct => TagResolutionStrategy::DirectRef,
            StrategyArg::Enumerate => TagResolutionStrategy::EnumerateTags,
        }
    }
}
