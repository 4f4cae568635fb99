//! Unfinished translation detection rule.
//!
//! Flags every message whose translation is not in the finished state
//! (unfinished, vanished, obsolete). Such messages make the UI fall back
//! to the source-language text, so the rule measures how much of the
//! application still shows English.

use crate::catalog::{Catalog, CheckContext, TranslationState};
use crate::issues::UnfinishedIssue;

use super::helpers::{is_ignored_context, message_ref};

pub fn check_unfinished_issues(ctx: &CheckContext) -> Vec<UnfinishedIssue> {
    check_unfinished(&ctx.catalogs, &ctx.config.ignore_contexts)
}

/// Check for messages without a usable translation.
pub fn check_unfinished(catalogs: &[Catalog], ignore_contexts: &[String]) -> Vec<UnfinishedIssue> {
    let mut issues: Vec<UnfinishedIssue> = Vec::new();

    for catalog in catalogs {
        for (context, message) in catalog.messages() {
            if is_ignored_context(ignore_contexts, context) {
                continue;
            }
            if message.translation.state != TranslationState::Finished {
                issues.push(UnfinishedIssue {
                    message: message_ref(catalog, context, message),
                    state: message.translation.state,
                });
            }
        }
    }

    issues.sort_by(|a, b| {
        a.message
            .catalog_path
            .cmp(&b.message.catalog_path)
            .then_with(|| a.message.line.cmp(&b.message.line))
    });

    issues
}
