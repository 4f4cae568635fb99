//! Issue types for catalog analysis results.
//!
//! This module defines all issue types that can be detected while checking
//! translation catalogs. Each issue is self-contained with all information
//! needed by the reporters (CLI, MCP).

use enum_dispatch::enum_dispatch;

use crate::catalog::TranslationState;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Unfinished,
    EmptyTranslation,
    DuplicateMessage,
    PluralForms,
    Placeholders,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Unfinished => write!(f, "unfinished"),
            Rule::EmptyTranslation => write!(f, "empty"),
            Rule::DuplicateMessage => write!(f, "duplicate"),
            Rule::PluralForms => write!(f, "plural-forms"),
            Rule::Placeholders => write!(f, "placeholders"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Message Coordinates
// ============================================================

/// Coordinates of a message inside a catalog file, carried by every
/// message-level issue for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    /// Path of the `.ts` file.
    pub catalog_path: String,
    /// Language key of the catalog (e.g. "de").
    pub language: String,
    /// Context (UI class) name.
    pub context: String,
    /// Source text of the message.
    pub source: String,
    /// Disambiguation comment, when present.
    pub comment: Option<String>,
    /// Line of the `<message>` element in the catalog file.
    pub line: usize,
}

// ============================================================
// Issue Types
// ============================================================

/// Message without a usable translation (unfinished, vanished, obsolete).
/// The UI will fall back to the source-language text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfinishedIssue {
    pub message: MessageRef,
    pub state: TranslationState,
}

impl UnfinishedIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::Unfinished
    }
}

/// Finished translation that resolves to an empty string. The host must
/// never show a blank label, so this is always a mistake in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTranslationIssue {
    pub message: MessageRef,
    /// For numerus messages: index of the empty form.
    pub form_index: Option<usize>,
}

impl EmptyTranslationIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::EmptyTranslation
    }
}

/// Two messages share a (context, source, disambiguation) key. Only the
/// last one is reachable through lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateMessageIssue {
    pub message: MessageRef,
    /// Line of the earlier occurrence that this message shadows.
    pub first_line: usize,
}

impl DuplicateMessageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::DuplicateMessage
    }
}

/// What is wrong with the plural forms of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluralFormsProblem {
    /// Numerus message carrying the wrong number of forms for the
    /// catalog's language.
    CountMismatch { expected: usize, actual: usize },
    /// `%n` appears in a message that is not marked numerus; the count
    /// can never be substituted.
    CountMarkerWithoutNumerus,
}

impl std::fmt::Display for PluralFormsProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluralFormsProblem::CountMismatch { expected, actual } => {
                write!(f, "has {} plural form(s), language expects {}", actual, expected)
            }
            PluralFormsProblem::CountMarkerWithoutNumerus => {
                write!(f, "uses %n but is not marked as a numerus message")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralFormsIssue {
    pub message: MessageRef,
    pub problem: PluralFormsProblem,
}

impl PluralFormsIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::PluralForms
    }
}

/// Positional placeholders (`%1`, `%2`, ...) differ between source and
/// translation, so runtime argument substitution will misbehave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderIssue {
    pub message: MessageRef,
    /// Placeholders present in the source but absent from the translation.
    pub missing: Vec<String>,
    /// Placeholders present in the translation but absent from the source.
    pub invented: Vec<String>,
    /// For numerus messages: index of the offending form.
    pub form_index: Option<usize>,
}

impl PlaceholderIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::Placeholders
    }
}

// ============================================================
// Special Issue Types
// ============================================================

/// File could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A catalog issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Unfinished(UnfinishedIssue),
    EmptyTranslation(EmptyTranslationIssue),
    DuplicateMessage(DuplicateMessageIssue),
    PluralForms(PluralFormsIssue),
    Placeholders(PlaceholderIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::severity(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::severity(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::severity(),
            Issue::PluralForms(_) => PluralFormsIssue::severity(),
            Issue::Placeholders(_) => PlaceholderIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Unfinished(_) => UnfinishedIssue::rule(),
            Issue::EmptyTranslation(_) => EmptyTranslationIssue::rule(),
            Issue::DuplicateMessage(_) => DuplicateMessageIssue::rule(),
            Issue::PluralForms(_) => PluralFormsIssue::rule(),
            Issue::Placeholders(_) => PlaceholderIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A message inside a catalog file.
    Message(&'a MessageRef),
    /// File-level only (for ParseError - no line context).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// This trait is implemented by all issue types to provide a consistent
/// interface for the report functions. Uses `enum_dispatch` for zero-cost
/// dispatch on the `Issue` enum.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnfinishedIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "translation is {}, the UI will show the source text",
            self.state
        ))
    }
}

impl Report for EmptyTranslationIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        match self.form_index {
            Some(index) => Some(format!("plural form {} is empty", index)),
            None => Some("translation is empty".to_string()),
        }
    }
}

impl Report for DuplicateMessageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("shadows the message at line {}", self.first_line))
    }
}

impl Report for PluralFormsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(self.problem.to_string())
    }
}

impl Report for PlaceholderIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Message(&self.message)
    }

    fn message(&self) -> String {
        self.message.source.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing {}", self.missing.join(", ")));
        }
        if !self.invented.is_empty() {
            parts.push(format!("unexpected {}", self.invented.join(", ")));
        }
        if let Some(index) = self.form_index {
            parts.push(format!("in plural form {}", index));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("; "))
        }
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
