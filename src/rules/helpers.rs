//! Shared helpers for rule implementations.

use crate::catalog::{Catalog, Message, TsContext};
use crate::issues::MessageRef;

/// Build the report coordinates for a message.
pub fn message_ref(catalog: &Catalog, context: &TsContext, message: &Message) -> MessageRef {
    MessageRef {
        catalog_path: catalog.file_path.clone(),
        language: catalog.language_key(),
        context: context.name.clone(),
        source: message.source.clone(),
        comment: message.comment.clone(),
        line: message.ts_line,
    }
}

/// True when a context is exempt from checking.
pub fn is_ignored_context(ignore_contexts: &[String], context: &TsContext) -> bool {
    ignore_contexts.iter().any(|name| name == &context.name)
}
