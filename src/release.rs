//! Naming rules and fixed templates for a hotfix cut.
//!
//! Everything here is a pure derivation from the release tag. The issue
//! body interpolates the tags it is handed verbatim; it never re-derives
//! them.

/// Label applied to every tracking issue.
pub const TRACKING_LABEL: &str = "RC";

/// Display tag for the hotfix, e.g. `v2.3.0` -> `v2.3.0-hotfix`.
///
/// Used in the issue body and the notification header only — it is never
/// an actual ref name.
pub fn hotfix_tag(release_tag: &str) -> String {
    format!("{release_tag}-hotfix")
}

/// Branch name for the hotfix, e.g. `v2.3.0` -> `hotfix/v2.3.0`.
pub fn hotfix_branch(release_tag: &str) -> String {
    format!("hotfix/{release_tag}")
}

/// Fully qualified git ref for the hotfix branch. The tag passes through
/// untransformed — no URL encoding, no sanitizing.
pub fn hotfix_branch_ref(release_tag: &str) -> String {
    format!("refs/heads/hotfix/{release_tag}")
}

/// Title of the tracking issue.
pub fn issue_title(release_tag: &str) -> String {
    format!("Hotfix {release_tag}")
}

/// Fixed governance body of the tracking issue.
///
/// External renderers depend on the exact section layout, so this must
/// stay byte-for-byte stable.
pub fn issue_body(release_tag: &str, hotfix_tag: &str) -> String {
    format!(
        "**Script generated description. DO NOT MODIFY**\n\
         \n\
         ## Metadata\n\
         - Release tag: {hotfix_tag}\n\
         - Branch: hotfix/{release_tag}\n\
         \n\
         ## Actions\n\
         - To add fixes:\n\
         \x20 1. checkout hotfix/{release_tag}\n\
         \x20 2. Check in fixes to the release branch.\n\
         \x20 3. (If applied) Cherry-pick the fix to the main branch.\n\
         - To approve the push: Add \"QA Approved\" label and close the issue.\n\
         - To cancel the push: Close the issue directly."
    )
}
