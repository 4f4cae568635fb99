//! Empty translation detection rule.
//!
//! A finished translation that resolves to an empty string would surface
//! as a blank label; the lookup layer refuses to return it and falls back
//! to the source text, so an empty finished entry is always a catalog bug
//! (usually a translation accidentally cleared after review).

use crate::catalog::{Catalog, CheckContext, TranslationText};
use crate::issues::EmptyTranslationIssue;

use super::helpers::{is_ignored_context, message_ref};

pub fn check_empty_issues(ctx: &CheckContext) -> Vec<EmptyTranslationIssue> {
    check_empty(&ctx.catalogs, &ctx.config.ignore_contexts)
}

/// Check for finished translations that are empty.
pub fn check_empty(catalogs: &[Catalog], ignore_contexts: &[String]) -> Vec<EmptyTranslationIssue> {
    let mut issues: Vec<EmptyTranslationIssue> = Vec::new();

    for catalog in catalogs {
        for (context, message) in catalog.messages() {
            if is_ignored_context(ignore_contexts, context) {
                continue;
            }
            if !message.translation.is_usable() {
                continue;
            }
            match &message.translation.text {
                TranslationText::Single(text) => {
                    if text.is_empty() {
                        issues.push(EmptyTranslationIssue {
                            message: message_ref(catalog, context, message),
                            form_index: None,
                        });
                    }
                }
                TranslationText::Numerus(forms) => {
                    if forms.is_empty() {
                        issues.push(EmptyTranslationIssue {
                            message: message_ref(catalog, context, message),
                            form_index: None,
                        });
                        continue;
                    }
                    for (index, form) in forms.iter().enumerate() {
                        if form.is_empty() {
                            issues.push(EmptyTranslationIssue {
                                message: message_ref(catalog, context, message),
                                form_index: Some(index),
                            });
                        }
                    }
                }
            }
        }
    }

    issues.sort_by(|a, b| {
        a.message
            .catalog_path
            .cmp(&b.message.catalog_path)
            .then_with(|| a.message.line.cmp(&b.message.line))
            .then_with(|| a.form_index.cmp(&b.form_index))
    });

    issues
}
