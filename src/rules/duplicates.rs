//! Duplicate message detection rule.
//!
//! A (context, source, disambiguation) triple uniquely identifies a message
//! within a catalog. When a document carries the same triple twice, only
//! the last occurrence is reachable through lookup; the earlier ones are
//! dead weight that usually indicates a botched merge of the catalog file.

use std::collections::HashMap;

use crate::catalog::{Catalog, CheckContext, MessageKey};
use crate::issues::DuplicateMessageIssue;

use super::helpers::{is_ignored_context, message_ref};

pub fn check_duplicate_issues(ctx: &CheckContext) -> Vec<DuplicateMessageIssue> {
    check_duplicates(&ctx.catalogs, &ctx.config.ignore_contexts)
}

/// Check for messages sharing a key. Each later occurrence is reported,
/// pointing back at the line of the first one.
pub fn check_duplicates(
    catalogs: &[Catalog],
    ignore_contexts: &[String],
) -> Vec<DuplicateMessageIssue> {
    let mut issues: Vec<DuplicateMessageIssue> = Vec::new();

    for catalog in catalogs {
        let mut first_lines: HashMap<MessageKey, usize> = HashMap::new();
        for (context, message) in catalog.messages() {
            if is_ignored_context(ignore_contexts, context) {
                continue;
            }
            let key = message.key_in(&context.name);
            match first_lines.get(&key) {
                Some(&first_line) => {
                    issues.push(DuplicateMessageIssue {
                        message: message_ref(catalog, context, message),
                        first_line,
                    });
                }
                None => {
                    first_lines.insert(key, message.ts_line);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ts::parse_ts;

    fn catalog(doc: &str) -> Catalog {
        parse_ts(doc, "de.ts").unwrap()
    }

    #[test]
    fn test_unique_messages_pass() {
        let catalogs = vec![catalog(
            r#"<TS language="de"><context><name>A</name>
            <message><source>Lock</source><translation>Sperren</translation></message>
            <message><source>Unlock</source><translation>Entsperren</translation></message>
            </context></TS>"#,
        )];
        assert!(check_duplicates(&catalogs, &[]).is_empty());
    }

    #[test]
    fn test_duplicate_key_is_flagged() {
        let catalogs = vec![catalog(
            r#"<TS language="de"><context><name>A</name>
<message><source>Lock</source><translation>Sperren</translation></message>
<message><source>Lock</source><translation>Verriegeln</translation></message>
</context></TS>"#,
        )];
        let issues = check_duplicates(&catalogs, &[]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message.source, "Lock");
        assert_eq!(issues[0].first_line, 2);
        assert_eq!(issues[0].message.line, 3);
    }

    #[test]
    fn test_same_source_in_different_contexts_passes() {
        let catalogs = vec![catalog(
            r#"<TS language="de">
            <context><name>CrateFeature</name>
            <message><source>Remove</source><translation>Entfernen</translation></message>
            </context>
            <context><name>BasePlaylistFeature</name>
            <message><source>Remove</source><translation>Entfernen</translation></message>
            </context></TS>"#,
        )];
        assert!(check_duplicates(&catalogs, &[]).is_empty());
    }

    #[test]
    fn test_disambiguation_separates_messages() {
        let catalogs = vec![catalog(
            r#"<TS language="de"><context><name>CrateFeature</name>
            <message><source>_copy</source><translation>_Kopie</translation></message>
            <message><source>_copy</source><comment>[noun]</comment><translation>_Kopie</translation></message>
            </context></TS>"#,
        )];
        assert!(check_duplicates(&catalogs, &[]).is_empty());
    }
}
