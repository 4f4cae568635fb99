//! Plural form validation rule.
//!
//! Two defects around numerus handling:
//! - a finished numerus message carrying a different number of
//!   `<numerusform>` variants than the catalog language's plural rule
//!   expects (selection will clamp, showing the wrong grammatical number),
//! - `%n` appearing in a message that is not marked numerus, where the
//!   count can never be substituted.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::{Catalog, CheckContext, PluralRule, TranslationText};
use crate::issues::{PluralFormsIssue, PluralFormsProblem};

use super::helpers::{is_ignored_context, message_ref};

/// Matches the count marker `%n` (and its locale-aware `%Ln` variant).
fn count_marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"%L?n\b").expect("count marker regex is valid"))
}

pub fn check_plural_forms_issues(ctx: &CheckContext) -> Vec<PluralFormsIssue> {
    check_plural_forms(&ctx.catalogs, &ctx.config.ignore_contexts)
}

pub fn check_plural_forms(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<PluralFormsIssue> {
    let mut issues: Vec<PluralFormsIssue> = Vec::new();

    for catalog in catalogs {
        let rule = PluralRule::for_language(&catalog.language_key());
        let expected = rule.form_count();

        for (context, message) in catalog.messages() {
            if is_ignored_context(ignore_contexts, context) {
                continue;
            }

            if message.numerus {
                if !message.translation.is_usable() {
                    continue;
                }
                let actual = match &message.translation.text {
                    TranslationText::Numerus(forms) => forms.len(),
                    TranslationText::Single(text) => usize::from(!text.is_empty()),
                };
                if actual != expected {
                    issues.push(PluralFormsIssue {
                        message: message_ref(catalog, context, message),
                        problem: PluralFormsProblem::CountMismatch { expected, actual },
                    });
                }
            } else {
                let marker_in_source = count_marker_regex().is_match(&message.source);
                let marker_in_translation = match &message.translation.text {
                    TranslationText::Single(text) if message.translation.is_usable() => {
                        count_marker_regex().is_match(text)
                    }
                    _ => false,
                };
                if marker_in_source || marker_in_translation {
                    issues.push(PluralFormsIssue {
                        message: message_ref(catalog, context, message),
                        problem: PluralFormsProblem::CountMarkerWithoutNumerus,
                    });
                }
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
