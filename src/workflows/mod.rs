// Workflow orchestration modules

pub mod hotfix;

pub use hotfix::{HotfixError, HotfixOutcome, HotfixPipeline};
