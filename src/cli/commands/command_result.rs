use serde::Serialize;

use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Stats(StatsSummary),
    Query(QuerySummary),
    Init(InitSummary),
}

/// Completion figures for all loaded catalogs.
#[derive(Debug)]
pub struct StatsSummary {
    pub format: crate::cli::args::StatsFormat,
    pub catalogs: Vec<CatalogStats>,
}

/// Completion figures for one catalog file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub language: String,
    pub file_path: String,
    pub finished: usize,
    pub unfinished: usize,
    /// Vanished and obsolete messages, kept by the toolchain but unreachable.
    pub stale: usize,
    pub total: usize,
    pub contexts: Vec<ContextStats>,
}

impl CatalogStats {
    /// Finished share of the messages still present in the sources.
    pub fn completion_percent(&self) -> f64 {
        let reachable = self.finished + self.unfinished;
        if reachable == 0 {
            100.0
        } else {
            self.finished as f64 * 100.0 / reachable as f64
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextStats {
    pub name: String,
    pub finished: usize,
    pub total: usize,
}

/// Result of one lookup run through the `query` command.
#[derive(Debug)]
pub struct QuerySummary {
    pub language: String,
    pub resolved: String,
    /// False when the lookup fell back to the source text.
    pub matched: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lingo commands
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found during the check.
    /// Empty for non-check commands.
    pub issues: Vec<Issue>,
    /// Number of catalog files that failed to parse.
    pub parse_error_count: usize,
    /// Number of catalog files that were loaded.
    pub catalogs_checked: usize,
    /// Number of messages across all loaded catalogs.
    pub messages_checked: usize,
}
