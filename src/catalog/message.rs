//! Data model for TS translation catalogs.
//!
//! A catalog is an ordered list of contexts (one per UI class or dialog of
//! the host application), each holding the messages extracted from that
//! class. Catalogs are produced offline by the Qt toolchain, reviewed by
//! translators, and loaded read-only at application start or locale switch.

use std::fmt;

/// Separator between key components, shared with the gettext convention
/// for context-qualified message ids.
pub const KEY_SEPARATOR: char = '\u{4}';

/// One parsed `.ts` document.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Path of the `.ts` file this catalog was read from.
    pub file_path: String,
    /// Target language declared on the root element (e.g. `de`, `de_DE`).
    pub language: Option<String>,
    /// Source language declared on the root element (usually `en`).
    pub source_language: Option<String>,
    pub contexts: Vec<TsContext>,
}

impl Catalog {
    /// Language key used to identify this catalog, falling back to the
    /// file stem when the document declares no `language` attribute.
    pub fn language_key(&self) -> String {
        if let Some(lang) = &self.language
            && !lang.is_empty()
        {
            return lang.clone();
        }
        std::path::Path::new(&self.file_path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string()
    }

    /// Total number of messages across all contexts.
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }

    /// Iterate over `(context, message)` pairs in document order.
    pub fn messages(&self) -> impl Iterator<Item = (&TsContext, &Message)> {
        self.contexts
            .iter()
            .flat_map(|c| c.messages.iter().map(move |m| (c, m)))
    }
}

/// A named group of messages belonging to one UI class.
#[derive(Debug, Clone, Default)]
pub struct TsContext {
    pub name: String,
    pub messages: Vec<Message>,
}

/// One translatable unit: a source string plus its translation and metadata.
#[derive(Debug, Clone)]
pub struct Message {
    /// Source-language text; the lookup key together with `comment`.
    pub source: String,
    /// Disambiguation comment. Part of the key: two messages may share a
    /// source string and differ only here.
    pub comment: Option<String>,
    /// Translator guidance from the developers. Not part of the key.
    pub extracomment: Option<String>,
    /// Free-form note left by the translator. Not part of the key.
    pub translatorcomment: Option<String>,
    /// Provenance hints pointing into the host application's sources.
    /// Informational only; they may go stale without affecting lookups.
    pub locations: Vec<Location>,
    /// True for messages with plural-form variants.
    pub numerus: bool,
    pub translation: Translation,
    /// Line of the `<message>` element in the catalog document.
    pub ts_line: usize,
}

impl Message {
    /// Key identifying this message within its context.
    pub fn key_in(&self, context: &str) -> MessageKey {
        MessageKey::new(context, &self.source, self.comment.as_deref())
    }
}

/// Source-location hint (`filename` + `line`). Qt writes relative
/// locations in some configurations, so both parts are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<u32>,
}

/// Review state of a translation.
///
/// Anything other than `Finished` means the translation must not be shown:
/// the host substitutes the source text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranslationState {
    #[default]
    Finished,
    /// Not yet translated or not yet reviewed.
    Unfinished,
    /// The source string disappeared from the host sources; the Qt
    /// toolchain keeps the old translation around for recycling.
    Vanished,
    /// Like vanished, written by older toolchain versions.
    Obsolete,
}

impl fmt::Display for TranslationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationState::Finished => write!(f, "finished"),
            TranslationState::Unfinished => write!(f, "unfinished"),
            TranslationState::Vanished => write!(f, "vanished"),
            TranslationState::Obsolete => write!(f, "obsolete"),
        }
    }
}

/// Translation payload: a single string or a list of plural-form variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationText {
    Single(String),
    /// One entry per `<numerusform>`, in document order. The order follows
    /// the target language's plural rule (e.g. German: \[one, other\]).
    Numerus(Vec<String>),
}

impl Default for TranslationText {
    fn default() -> Self {
        TranslationText::Single(String::new())
    }
}

/// A message's translation: review state plus payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub state: TranslationState,
    pub text: TranslationText,
}

impl Translation {
    /// True when this translation may be shown to the user.
    pub fn is_usable(&self) -> bool {
        self.state == TranslationState::Finished
    }
}

/// Unique coordinate of a message: (context, source, disambiguation).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKey(String);

impl MessageKey {
    /// Build a key. An empty disambiguation comment is treated like an
    /// absent one, matching the Qt lookup behavior.
    pub fn new(context: &str, source: &str, comment: Option<&str>) -> Self {
        let mut key = String::with_capacity(
            context.len() + source.len() + comment.map_or(0, |c| c.len() + 1) + 1,
        );
        key.push_str(context);
        key.push(KEY_SEPARATOR);
        key.push_str(source);
        if let Some(comment) = comment
            && !comment.is_empty()
        {
            key.push(KEY_SEPARATOR);
            key.push_str(comment);
        }
        MessageKey(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
