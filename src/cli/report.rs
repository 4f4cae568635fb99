//! Report formatting and printing utilities.
//!
//! This module provides functions to display issues in cargo-style format.
//! Separate from core logic to allow lingo to be used as a library.

use std::io::{self, Write};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::args::StatsFormat;
use super::commands::{
    CommandResult, CommandSummary, InitSummary, QuerySummary, StatsSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Report, ReportLocation, Severity};
use crate::utils::{single_line, truncate_display};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum display width of a quoted source string in an issue line.
const MAX_SOURCE_DISPLAY: usize = 60;

/// Print issues in cargo-style format to stdout.
pub fn report(issues: &[Issue]) {
    report_to(issues, &mut io::stdout().lock());
}

/// Print issues to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn report_to<W: Write>(issues: &[Issue], writer: &mut W) {
    if issues.is_empty() {
        return;
    }

    let mut sorted = issues.to_vec();
    sorted.sort_by(compare_issues);

    for issue in &sorted {
        print_issue(issue, writer);
    }

    print_summary(&sorted, writer);
}

/// Print a success message when no issues are found.
pub fn print_success(catalog_files: usize, messages: usize) {
    print_success_to(catalog_files, messages, &mut io::stdout().lock());
}

/// Print a success message to a custom writer.
pub fn print_success_to<W: Write>(catalog_files: usize, messages: usize, writer: &mut W) {
    let msg = format!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} catalog {}, {} {} - no issues found",
            catalog_files,
            if catalog_files == 1 { "file" } else { "files" },
            messages,
            if messages == 1 { "message" } else { "messages" }
        )
        .green()
    );
    let _ = writeln!(writer, "{}", msg);
}

/// Print a warning about catalog files that could not be parsed.
pub fn print_parse_warning(count: usize, verbose: bool) {
    print_parse_warning_to(count, verbose, &mut io::stderr().lock());
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} catalog file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Check => {
            report(&result.issues);
            if result.issues.is_empty() {
                print_success(result.catalogs_checked, result.messages_checked);
            }
        }
        CommandSummary::Stats(summary) => print_stats(summary, verbose),
        CommandSummary::Query(summary) => print_query(summary, verbose),
        CommandSummary::Init(summary) => print_init(summary),
    }

    print_parse_warning(result.parse_error_count, verbose);
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.report_severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: \"{}\"  {}",
        severity_str,
        truncate_display(&single_line(&issue.message()), MAX_SOURCE_DISPLAY),
        issue.report_rule().to_string().dimmed().cyan()
    );

    // Print clickable location: --> path:line
    match issue.location() {
        ReportLocation::Message(msg) => {
            let _ = writeln!(
                writer,
                "  {} {}:{} ({})",
                "-->".blue(),
                msg.catalog_path,
                msg.line,
                msg.context
            );
        }
        ReportLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
    }

    // Print details if present (cargo-style note)
    if let Some(details) = issue.details() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "note:".bold(), details);
    }

    let _ = writeln!(writer); // Empty line between issues
}

fn print_summary<W: Write>(issues: &[Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Error)
        .count();
    let total_warnings = issues
        .iter()
        .filter(|i| i.report_severity() == Severity::Warning)
        .count();
    let total_problems = total_errors + total_warnings;

    if total_problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            total_problems,
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn compare_issues(a: &Issue, b: &Issue) -> std::cmp::Ordering {
    fn sort_key<'a>(loc: &ReportLocation<'a>) -> (&'a str, usize) {
        match loc {
            ReportLocation::Message(msg) => (msg.catalog_path.as_str(), msg.line),
            ReportLocation::File { path } => (path, 0),
        }
    }

    let a_key = sort_key(&a.location());
    let b_key = sort_key(&b.location());
    a_key.0.cmp(b_key.0).then_with(|| a_key.1.cmp(&b_key.1))
}

// ============================================================
// Stats Output
// ============================================================

fn print_stats(summary: &StatsSummary, verbose: bool) {
    match summary.format {
        StatsFormat::Json => print_stats_json(summary),
        StatsFormat::Text => print_stats_text(summary, verbose),
    }
}

fn print_stats_json(summary: &StatsSummary) {
    let catalogs: Vec<serde_json::Value> = summary
        .catalogs
        .iter()
        .map(|c| {
            serde_json::json!({
                "language": &c.language,
                "filePath": &c.file_path,
                "finished": c.finished,
                "unfinished": c.unfinished,
                "stale": c.stale,
                "total": c.total,
                "completionPercent": round_percent(c.completion_percent()),
                "contexts": &c.contexts,
            })
        })
        .collect();

    let value = serde_json::json!({ "catalogs": catalogs });
    if let Ok(json) = serde_json::to_string_pretty(&value) {
        println!("{}", json);
    }
}

fn round_percent(percent: f64) -> f64 {
    (percent * 10.0).round() / 10.0
}

fn print_stats_text(summary: &StatsSummary, verbose: bool) {
    if summary.catalogs.is_empty() {
        println!("No catalogs found.");
        return;
    }

    let lang_width = summary
        .catalogs
        .iter()
        .map(|c| c.language.width())
        .chain(std::iter::once("Language".width()))
        .max()
        .unwrap_or(8);

    println!(
        "{:<lang_width$}  {:>8}  {:>10}  {:>5}  {:>5}  {:>6}",
        "Language".bold(),
        "Finished".bold(),
        "Unfinished".bold(),
        "Stale".bold(),
        "Total".bold(),
        "Done".bold(),
    );

    for catalog in &summary.catalogs {
        let percent = format!("{:.1}%", catalog.completion_percent());
        let percent = if catalog.unfinished == 0 {
            percent.green()
        } else {
            percent.normal()
        };
        println!(
            "{:<lang_width$}  {:>8}  {:>10}  {:>5}  {:>5}  {:>6}",
            catalog.language,
            catalog.finished,
            catalog.unfinished,
            catalog.stale,
            catalog.total,
            percent,
        );

        if verbose {
            for context in &catalog.contexts {
                println!(
                    "  {:<38}  {:>4}/{}",
                    truncate_display(&context.name, 38).dimmed(),
                    context.finished,
                    context.total
                );
            }
        }
    }
}

// ============================================================
// Query Output
// ============================================================

fn print_query(summary: &QuerySummary, verbose: bool) {
    println!("{}", summary.resolved);

    if verbose && !summary.matched {
        eprintln!(
            "{} no finished translation in '{}', showing the source text",
            "note:".bold(),
            summary.language
        );
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

// ============================================================
// Tests
// ============================================================
