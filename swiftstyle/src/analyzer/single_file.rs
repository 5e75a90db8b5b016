//! Per-file analysis and aggregation.

use super::types::{AnalysisResult, AnalysisSummary, FileAnalysisResult, ParseError};
use super::SwiftStyle;
use crate::rules::rule_registry::{get_rule_descriptor, RuleCategory};
use crate::rules::{architecture, formatting, idiom, naming, safety, Context, Rule};
use crate::syntax::SwiftFile;
use crate::utils::{get_suppressed_lines, is_line_suppressed, is_test_path};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

impl SwiftStyle {
    /// Analyzes one file: parse, run enabled rules, filter suppressions.
    ///
    /// Unreadable files are skipped silently (they typically vanished between
    /// discovery and analysis); parse errors are reported but do not stop
    /// rule checks because parsing is error-tolerant.
    #[must_use]
    pub fn analyze_file(&self, path: &Path) -> FileAnalysisResult {
        let mut result = FileAnalysisResult::default();
        let Ok(source) = std::fs::read_to_string(path) else {
            if self.verbose {
                eprintln!("[VERBOSE] Skipping unreadable file: {}", path.display());
            }
            return result;
        };

        let file = match SwiftFile::parse(&source) {
            Ok(file) => file,
            Err(err) => {
                result.parse_errors.push(ParseError {
                    file: path.to_path_buf(),
                    line: 0,
                    message: err.to_string(),
                });
                return result;
            }
        };
        result.lines = file.lines.len();

        if let Some((line, col)) = file.syntax_error {
            result.parse_errors.push(ParseError {
                file: path.to_path_buf(),
                line,
                message: format!("syntax error at {line}:{col}"),
            });
        }

        // Layer membership is decided relative to the analysis root, so a
        // checkout that happens to live under a `Data/` directory does not
        // classify the whole project.
        let layer_path = path.strip_prefix(&self.analysis_root).unwrap_or(path);
        let context = Context {
            filename: path.to_path_buf(),
            layer: architecture::layer_of_path(layer_path, &self.config.style.layers),
            config: self.config.clone(),
        };

        let suppressed = get_suppressed_lines(&source);
        let globally_ignored = self.config.style.ignore.clone().unwrap_or_default();

        for mut rule in self.build_rules() {
            let Some(findings) = rule.check_file(&file, &context) else {
                continue;
            };
            for finding in findings {
                if is_line_suppressed(&suppressed, finding.line, &finding.rule_id) {
                    continue;
                }
                if globally_ignored
                    .iter()
                    .any(|id| id.eq_ignore_ascii_case(&finding.rule_id))
                {
                    continue;
                }
                if self.is_rule_ignored_for_path(path, &finding.rule_id) {
                    continue;
                }
                result.findings.push(finding);
            }
        }

        result
    }

    fn build_rules(&self) -> Vec<Box<dyn Rule>> {
        let mut rules: Vec<Box<dyn Rule>> = Vec::new();
        if self.enable_formatting {
            rules.extend(formatting::get_formatting_rules(&self.config));
        }
        if self.enable_safety {
            rules.extend(safety::get_safety_rules());
        }
        if self.enable_idiom {
            rules.extend(idiom::get_idiom_rules());
        }
        if self.enable_naming {
            rules.extend(naming::get_naming_rules());
        }
        if self.enable_architecture {
            rules.extend(architecture::get_architecture_rules());
        }
        rules
    }

    /// Analyzes all Swift files under the given paths and aggregates the
    /// findings by category, sorted by (file, line, column).
    pub fn analyze_paths(&mut self, paths: &[PathBuf]) -> AnalysisResult {
        let mut files = Vec::new();
        for path in paths {
            files.extend(super::traversal::collect_swift_files(
                path,
                &self.exclude_folders,
                &self.include_folders,
                self.verbose,
            ));
        }

        if !self.include_tests {
            files.retain(|p| !is_test_path(&p.to_string_lossy()));
        }

        let progress = self.progress_bar.clone();
        let file_results: Vec<FileAnalysisResult> = files
            .par_iter()
            .map(|path| {
                if self.verbose {
                    eprintln!("[VERBOSE] Analyzing: {}", path.display());
                }
                let res = self.analyze_file(path);
                if let Some(ref pb) = progress {
                    pb.inc(1);
                }
                res
            })
            .collect();

        self.total_files_analyzed = files.len();
        self.total_lines_analyzed = file_results.iter().map(|r| r.lines).sum();

        let mut result = AnalysisResult {
            summary: AnalysisSummary {
                total_files: self.total_files_analyzed,
                total_lines: self.total_lines_analyzed,
            },
            ..AnalysisResult::default()
        };

        let mut findings: Vec<crate::rules::Finding> = Vec::new();
        for file_result in file_results {
            findings.extend(file_result.findings);
            result.parse_errors.extend(file_result.parse_errors);
        }
        findings.sort_by(|a, b| {
            (&a.file, a.line, a.col, &a.rule_id).cmp(&(&b.file, b.line, b.col, &b.rule_id))
        });
        result
            .parse_errors
            .sort_by(|a, b| (&a.file, a.line).cmp(&(&b.file, b.line)));

        for finding in findings {
            let category = get_rule_descriptor(&finding.rule_id).map(|d| d.category);
            match category {
                Some(RuleCategory::Formatting) => result.formatting.push(finding),
                Some(RuleCategory::Safety) => result.safety.push(finding),
                Some(RuleCategory::Idiom) => result.idiom.push(finding),
                Some(RuleCategory::Naming) => result.naming.push(finding),
                Some(RuleCategory::Architecture) | None => result.architecture.push(finding),
            }
        }

        result
    }
}
