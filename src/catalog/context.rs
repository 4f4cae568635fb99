//! Shared context for CLI commands and MCP tools.

use std::{
    cell::OnceCell,
    collections::HashMap,
    env,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::{
    catalog::{
        Catalog, Translator,
        scan::scan_catalog_files,
    },
    cli::args::CommonArgs,
    config::{Config, load_config},
    issues::ParseErrorIssue,
};

/// Loaded configuration plus all catalogs found under the catalogs root.
///
/// Catalogs are loaded eagerly so configuration and scan errors surface
/// before any command logic runs; the per-language lookup translators are
/// built lazily since only `query` and the MCP tools need them.
///
/// Configuration priority follows the CLI convention: arguments override
/// the `.lingorc.json` file, which overrides built-in defaults.
pub struct CheckContext {
    pub config: Config,
    /// Directory the catalogs were scanned from.
    pub catalogs_dir: PathBuf,
    pub catalogs: Vec<Catalog>,
    /// Catalog files that could not be parsed, carried as issues.
    parse_errors: Vec<ParseErrorIssue>,
    translators: OnceCell<HashMap<String, Translator>>,
}

impl CheckContext {
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let start_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_root(&start_dir, common_args)
    }

    /// Build the context from an explicit project root instead of the
    /// working directory. The MCP tools go through this entry point.
    pub fn with_root(root: &Path, common_args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(root)?;

        if common_args.verbose && !config_result.from_file {
            eprintln!("Note: No .lingorc.json found, using default configuration");
        }

        let mut config = config_result.config;
        if let Some(ref catalogs_root) = common_args.catalogs_root {
            config.catalogs_root = catalogs_root.to_string_lossy().to_string();
        }
        if let Some(ref source_language) = common_args.source_language {
            config.source_language = source_language.clone();
        }

        // join() keeps absolute overrides as-is.
        let catalogs_dir = root.join(&config.catalogs_root);
        let scan = scan_catalog_files(&catalogs_dir, &config.ignores)?;

        let parse_errors = scan
            .warnings
            .iter()
            .map(|warning| ParseErrorIssue {
                file_path: warning.file_path.clone(),
                error: warning.error.clone(),
            })
            .collect();

        Ok(Self {
            config,
            catalogs_dir,
            catalogs: scan.catalogs,
            parse_errors,
            translators: OnceCell::new(),
        })
    }

    /// Lookup translators keyed by language, built on first use.
    pub fn translators(&self) -> &HashMap<String, Translator> {
        self.translators.get_or_init(|| {
            self.catalogs
                .iter()
                .map(|catalog| (catalog.language_key(), Translator::new(catalog)))
                .collect()
        })
    }

    pub fn translator_for(&self, language: &str) -> Option<&Translator> {
        self.translators().get(language)
    }

    /// Parse errors from catalog files, collected during the scan.
    pub fn parse_errors(&self) -> &[ParseErrorIssue] {
        &self.parse_errors
    }
}
