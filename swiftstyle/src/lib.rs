//! swiftstyle - Swift style-guide conformance checks.
//!
//! Checks Swift source trees against a house style guide: formatting layout,
//! optional-safety discipline, language idiom preferences, identifier casing,
//! and Clean Architecture layering. The front end is the reusable
//! `tree-sitter-swift` grammar; every rule is an independent declarative
//! check over a single file's token stream, and findings carry stable rule
//! IDs with file/line/column locations.

/// Analysis engine: discovery, per-file rule runs, aggregation.
pub mod analyzer;
/// Command line argument definitions.
pub mod cli;
/// Metric and catalog subcommand implementations.
pub mod commands;
/// Configuration loading and models.
pub mod config;
/// Shared constants, compiled regexes, and static sets.
pub mod constants;
/// Shared entry point used by every binary surface.
pub mod entry_point;
/// Report and table rendering.
pub mod output;
/// Raw line metrics (LOC, SLOC, comments, blank).
pub mod raw_metrics;
/// The style rule catalog and rule engine types.
pub mod rules;
/// Swift source front end (parser and token stream).
pub mod syntax;
/// Small shared utilities (line index, suppressions, path helpers).
pub mod utils;
