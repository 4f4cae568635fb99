//! CLI argument definitions using clap.
//!
//! This module defines the command-line interface structure for all Lingo
//! commands. It uses clap's derive API for declarative argument parsing.
//!
//! ## Commands
//!
//! - `check`: Lint translation catalogs (unfinished, empty, duplicate, ...)
//! - `stats`: Report per-catalog translation completion
//! - `query`: Resolve one (context, source) lookup against the catalogs
//! - `init`: Initialize lingo configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::check::CheckRule;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.args.common.verbose,
            Some(Command::Stats(cmd)) => cmd.args.common.verbose,
            Some(Command::Query(cmd)) => cmd.args.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory containing the .ts catalog files (overrides config file)
    #[arg(long)]
    pub catalogs_root: Option<PathBuf>,

    /// Source language of the catalogs (overrides config file)
    #[arg(long)]
    pub source_language: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Rules to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<CheckRule>,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: StatsFormat,
    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Args)]
pub struct QueryCommand {
    /// Context (UI class) name of the message
    #[arg(long)]
    pub context: String,

    /// Source text of the message
    #[arg(long)]
    pub source: String,

    /// Disambiguation comment of the message
    #[arg(long)]
    pub comment: Option<String>,

    /// Plural count for numerus messages
    #[arg(long)]
    pub count: Option<u64>,

    /// Language of the catalog to query (required when several are loaded)
    #[arg(long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub args: CheckArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check catalogs for translation issues (unfinished, empty, duplicate, plural forms, placeholders)
    Check(CheckCommand),
    /// Show translation completion statistics per catalog
    Stats(StatsCommand),
    /// Resolve a single translation lookup, with source-text fallback
    Query(QueryCommand),
    /// Initialize a new .lingorc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
