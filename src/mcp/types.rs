use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================
// Config Types (get_config)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root (the directory holding .lingorc.json)
    pub project_root_path: String,
}

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub ignore_contexts: Vec<String>,
    pub catalogs_root: String,
    pub source_language: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            ignore_contexts: c.ignore_contexts,
            catalogs_root: c.catalogs_root,
            source_language: c.source_language,
        }
    }
}

// ============================================================
// Overview Types (scan_overview)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

/// Result of scan_overview operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanOverviewResult {
    pub catalogs: Vec<CatalogOverview>,
    pub issues: IssueCounts,
}

/// Completion figures for one catalog
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogOverview {
    pub language: String,
    pub file_path: String,
    pub total_messages: usize,
    pub finished: usize,
    pub unfinished: usize,
    pub completion_percent: f64,
}

/// Issue counts across all catalogs, by rule
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueCounts {
    pub unfinished: usize,
    pub empty: usize,
    pub duplicate: usize,
    pub plural_forms: usize,
    pub placeholders: usize,
    pub parse_errors: usize,
}

// ============================================================
// Unfinished Types (scan_unfinished)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanUnfinishedParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Restrict to one catalog language (e.g. "de")
    pub language: Option<String>,
    /// Maximum number of items to return (default 50, max 100)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

/// Result of scan_unfinished operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedScanResult {
    pub total_count: usize,
    pub items: Vec<UnfinishedItem>,
    pub pagination: Pagination,
}

/// One message without a usable translation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnfinishedItem {
    pub language: String,
    pub context: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// Review state: "unfinished", "vanished", or "obsolete"
    pub state: String,
    pub file_path: String,
    pub line: usize,
}

/// Pagination info for paginated scan results
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Query Types (query_translation)
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Language of the catalog to query (e.g. "de")
    pub language: String,
    /// Context (UI class) name of the message
    pub context: String,
    /// Source text of the message
    pub source: String,
    /// Disambiguation comment, when the message carries one
    pub comment: Option<String>,
    /// Plural count for numerus messages
    pub count: Option<u64>,
}

/// Result of query_translation operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryTranslationResult {
    pub language: String,
    /// The displayable text; falls back to the source text when no finished
    /// translation matches, never an empty string
    pub resolved_text: String,
    /// True when a finished catalog entry matched the lookup
    pub matched: bool,
}
