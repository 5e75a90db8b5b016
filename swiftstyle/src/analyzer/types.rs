//! Result types produced by the analyzer.

use crate::rules::Finding;
use serde::Serialize;
use std::path::PathBuf;

/// A file the grammar could not fully parse.
///
/// Parsing is error-tolerant, so rules still ran over whatever tokens were
/// recovered; the error is surfaced so the reader knows findings near the
/// error location may be incomplete.
#[derive(Debug, Clone, Serialize)]
pub struct ParseError {
    /// File containing the syntax error.
    pub file: PathBuf,
    /// 1-indexed line of the first error node.
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

/// Aggregate counters for one analysis run.
#[derive(Debug, Default, Clone, Serialize)]
pub struct AnalysisSummary {
    /// Number of files analyzed.
    pub total_files: usize,
    /// Number of source lines analyzed.
    pub total_lines: usize,
}

/// Complete result of an analysis run, findings split by category.
#[derive(Debug, Default, Serialize)]
pub struct AnalysisResult {
    /// Formatting findings (SWS-F1xx).
    pub formatting: Vec<Finding>,
    /// Optional-safety findings (SWS-S2xx).
    pub safety: Vec<Finding>,
    /// Idiom findings (SWS-Q3xx).
    pub idiom: Vec<Finding>,
    /// Naming findings (SWS-N4xx).
    pub naming: Vec<Finding>,
    /// Clean Architecture findings (SWS-A5xx).
    pub architecture: Vec<Finding>,
    /// Files that failed to parse cleanly.
    pub parse_errors: Vec<ParseError>,
    /// Run counters.
    pub summary: AnalysisSummary,
}

impl AnalysisResult {
    /// Total number of findings across all categories. Parse errors are not
    /// findings and do not count.
    #[must_use]
    pub fn total_findings(&self) -> usize {
        self.formatting.len()
            + self.safety.len()
            + self.idiom.len()
            + self.naming.len()
            + self.architecture.len()
    }
}

/// Result of analyzing one file, before aggregation.
#[derive(Debug, Default)]
pub struct FileAnalysisResult {
    /// Findings that survived suppression and ignore filtering.
    pub findings: Vec<Finding>,
    /// Parse errors, at most one per file.
    pub parse_errors: Vec<ParseError>,
    /// Line count, for the summary.
    pub lines: usize,
}
