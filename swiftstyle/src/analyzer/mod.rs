//! Analysis engine.
//!
//! Orchestrates file discovery, per-file rule runs, suppression filtering,
//! and aggregation into an `AnalysisResult`. Files are independent, so the
//! per-file phase runs in parallel.

mod builder;
mod single_file;
pub(crate) mod traversal;

/// Result types and analysis summaries.
pub mod types;

pub use types::{AnalysisResult, AnalysisSummary, FileAnalysisResult, ParseError};

use crate::config::Config;
use globset::GlobMatcher;
use rustc_hash::FxHashSet;

pub(crate) struct PerFileIgnoreRule {
    matcher: GlobMatcher,
    rule_ids: FxHashSet<String>,
}

#[allow(clippy::struct_excessive_bools)]
/// Main analyzer state and runtime configuration.
pub struct SwiftStyle {
    /// Whether formatting rules run.
    pub enable_formatting: bool,
    /// Whether optional-safety rules run.
    pub enable_safety: bool,
    /// Whether idiom rules run.
    pub enable_idiom: bool,
    /// Whether naming rules run.
    pub enable_naming: bool,
    /// Whether Clean Architecture rules run.
    pub enable_architecture: bool,
    /// Whether to include test files in the analysis.
    pub include_tests: bool,
    /// Folders to exclude from analysis.
    pub exclude_folders: Vec<String>,
    /// Folders to force-include in analysis (overrides default exclusions).
    pub include_folders: Vec<String>,
    /// Total number of files analyzed.
    pub total_files_analyzed: usize,
    /// Total number of lines analyzed.
    pub total_lines_analyzed: usize,
    /// Configuration object.
    pub config: Config,
    /// Progress bar for tracking analysis progress (thread-safe).
    pub progress_bar: Option<std::sync::Arc<indicatif::ProgressBar>>,
    /// Whether to enable verbose logging.
    pub verbose: bool,
    /// Analysis root for relative path resolution.
    pub analysis_root: std::path::PathBuf,
    per_file_ignore_rules: Vec<PerFileIgnoreRule>,
}

impl Default for SwiftStyle {
    fn default() -> Self {
        Self {
            enable_formatting: true,
            enable_safety: true,
            enable_idiom: true,
            enable_naming: true,
            enable_architecture: true,
            include_tests: false,
            exclude_folders: Vec::new(),
            include_folders: Vec::new(),
            total_files_analyzed: 0,
            total_lines_analyzed: 0,
            config: Config::default(),
            progress_bar: None,
            verbose: false,
            analysis_root: std::path::PathBuf::from("."),
            per_file_ignore_rules: Vec::new(),
        }
    }
}

impl SwiftStyle {
    /// Returns whether a rule id should be ignored for a given file path.
    #[must_use]
    pub fn is_rule_ignored_for_path(&self, file_path: &std::path::Path, rule_id: &str) -> bool {
        if self.per_file_ignore_rules.is_empty() {
            return false;
        }

        let normalized_rule_id = rule_id.trim().to_uppercase();
        if normalized_rule_id.is_empty() {
            return false;
        }

        let relative_path = match file_path.strip_prefix(&self.analysis_root) {
            Ok(p) => p,
            Err(_) => file_path,
        };

        let normalized_path = Self::normalize_glob_path(relative_path);
        self.per_file_ignore_rules.iter().any(|rule| {
            rule.rule_ids.contains(&normalized_rule_id) && rule.matcher.is_match(&normalized_path)
        })
    }

    #[must_use]
    fn normalize_glob_path(path: &std::path::Path) -> String {
        path.to_string_lossy().replace('\\', "/")
    }
}
