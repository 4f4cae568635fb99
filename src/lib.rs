//! Lingo - checker and query tool for Qt Linguist TS translation catalogs
//!
//! Lingo is a CLI tool and library for loading, querying, and checking Qt
//! Linguist `.ts` translation catalogs. It reports unfinished and empty
//! translations, duplicate message keys, plural-form mismatches, and
//! placeholder drift, and resolves lookups with the same source-text
//! fallback the host UI applies.
//!
//! ## Module Structure
//!
//! - `catalog`: Catalog data model, TS reader, plural rules, lookup index
//! - `cli`: Command-line interface layer (user-facing commands and output)
//! - `config`: Configuration file loading and parsing
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules for catalog issues
//! - `utils`: Shared utility functions

pub mod catalog;
pub mod cli;
pub mod config;
pub mod issues;
pub mod mcp;
pub mod rules;
pub mod utils;
