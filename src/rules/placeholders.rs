//! Positional placeholder validation rule.
//!
//! Qt substitutes `%1`..`%99` (and the locale-aware `%L1` spelling) with
//! runtime arguments. A translation that drops a marker silently swallows an
//! argument, and one that invents a marker renders it literally, so both
//! directions are flagged. Numerus messages are only checked for invented
//! markers per form: dropping the number in the singular form is legitimate
//! style ("ein Titel" instead of "%n Titel").

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Catalog, CheckContext, TranslationText};
use crate::issues::PlaceholderIssue;

use super::helpers::{is_ignored_context, message_ref};

/// Matches `%1`..`%99` and the `%L1` locale-aware spelling.
fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%L?(\d{1,2})").expect("placeholder regex is valid"))
}

/// Argument numbers referenced by a text. `%L1` and `%1` are the same
/// argument, so the `L` is dropped during collection.
fn placeholders_of(text: &str) -> BTreeSet<u8> {
    placeholder_regex()
        .captures_iter(text)
        .filter_map(|c| c[1].parse().ok())
        .collect()
}

fn format_markers(markers: impl IntoIterator<Item = u8>) -> Vec<String> {
    markers.into_iter().map(|n| format!("%{}", n)).collect()
}

pub fn check_placeholder_issues(ctx: &CheckContext) -> Vec<PlaceholderIssue> {
    check_placeholders(&ctx.catalogs, &ctx.config.ignore_contexts)
}

pub fn check_placeholders(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<PlaceholderIssue> {
    let mut issues: Vec<PlaceholderIssue> = Vec::new();

    for catalog in catalogs {
        for (context, message) in catalog.messages() {
            if is_ignored_context(ignore_contexts, context) {
                continue;
            }
            if !message.translation.is_usable() {
                continue;
            }

            let expected = placeholders_of(&message.source);

            match &message.translation.text {
                TranslationText::Single(text) => {
                    if text.is_empty() {
                        continue;
                    }
                    let actual = placeholders_of(text);
                    let missing: Vec<u8> = expected.difference(&actual).copied().collect();
                    let invented: Vec<u8> = actual.difference(&expected).copied().collect();
                    if !missing.is_empty() || !invented.is_empty() {
                        issues.push(PlaceholderIssue {
                            message: message_ref(catalog, context, message),
                            missing: format_markers(missing),
                            invented: format_markers(invented),
                            form_index: None,
                        });
                    }
                }
                TranslationText::Numerus(forms) => {
                    for (index, form) in forms.iter().enumerate() {
                        let actual = placeholders_of(form);
                        let invented: Vec<u8> = actual.difference(&expected).copied().collect();
                        if !invented.is_empty() {
                            issues.push(PlaceholderIssue {
                                message: message_ref(catalog, context, message),
                                missing: Vec::new(),
                                invented: format_markers(invented),
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
