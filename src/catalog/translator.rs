//! Read-only lookup over a loaded catalog.
//!
//! The translator owns an immutable index built once from a parsed catalog
//! and is shared across threads without locking; lookups never allocate
//! beyond the composite key. The contract follows the host UI's needs:
//! whatever the state of the catalog, `translate` returns displayable text,
//! falling back to the source string rather than ever yielding "".

use std::collections::HashMap;

use super::message::{Catalog, MessageKey, Translation, TranslationText};
use super::plurals::PluralRule;

pub struct Translator {
    language: String,
    rule: PluralRule,
    entries: HashMap<MessageKey, Translation>,
}

impl Translator {
    /// Build the lookup index for a catalog. When a document contains two
    /// messages with the same (context, source, comment) key, the later one
    /// wins; the `duplicate` check rule reports such collisions.
    pub fn new(catalog: &Catalog) -> Self {
        let language = catalog.language_key();
        let rule = PluralRule::for_language(&language);
        let mut entries = HashMap::with_capacity(catalog.message_count());
        for (ctx, msg) in catalog.messages() {
            entries.insert(msg.key_in(&ctx.name), msg.translation.clone());
        }
        Self {
            language,
            rule,
            entries,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entry lookup. A disambiguated miss falls through to the
    /// comment-less entry, matching QTranslator; a lookup without
    /// disambiguation never matches a disambiguated entry.
    pub fn entry(
        &self,
        context: &str,
        source: &str,
        disambiguation: Option<&str>,
    ) -> Option<&Translation> {
        let exact = self
            .entries
            .get(&MessageKey::new(context, source, disambiguation));
        if exact.is_some() {
            return exact;
        }
        match disambiguation {
            Some(comment) if !comment.is_empty() => {
                self.entries.get(&MessageKey::new(context, source, None))
            }
            _ => None,
        }
    }

    /// Resolve a message to displayable text.
    ///
    /// Returns the finished translation (byte-for-byte, including any
    /// embedded markup), selecting the plural form for `count` on numerus
    /// messages. Falls back to `source` when the message is unknown, not
    /// finished, or resolves to an empty string.
    pub fn translate<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        disambiguation: Option<&str>,
        count: Option<u64>,
    ) -> &'a str {
        let Some(translation) = self.entry(context, source, disambiguation) else {
            return source;
        };
        if !translation.is_usable() {
            return source;
        }
        match &translation.text {
            TranslationText::Single(text) => {
                if text.is_empty() {
                    source
                } else {
                    text
                }
            }
            TranslationText::Numerus(forms) => {
                let Some(last) = forms.len().checked_sub(1) else {
                    return source;
                };
                // A missing or out-of-range count selects the "other" form.
                let index = match count {
                    Some(n) => self.rule.index_for(n).min(last),
                    None => last,
                };
                let form = &forms[index];
                if form.is_empty() { source } else { form }
            }
        }
    }
}
