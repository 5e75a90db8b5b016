//! Builder-style methods for the SwiftStyle analyzer.

use globset::GlobBuilder;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{PerFileIgnoreRule, SwiftStyle};
use crate::config::Config;

impl SwiftStyle {
    /// Creates a new `SwiftStyle` analyzer instance with the given configuration.
    #[must_use]
    #[allow(clippy::too_many_arguments, clippy::fn_params_excessive_bools)]
    pub fn new(
        enable_formatting: bool,
        enable_safety: bool,
        enable_idiom: bool,
        enable_naming: bool,
        enable_architecture: bool,
        include_tests: bool,
        exclude_folders: Vec<String>,
        include_folders: Vec<String>,
        config: Config,
    ) -> Self {
        let per_file_ignore_rules =
            build_per_file_ignore_rules(config.style.per_file_ignores.as_ref());

        Self {
            enable_formatting,
            enable_safety,
            enable_idiom,
            enable_naming,
            enable_architecture,
            include_tests,
            exclude_folders,
            include_folders,
            total_files_analyzed: 0,
            total_lines_analyzed: 0,
            config,
            progress_bar: None,
            verbose: false,
            analysis_root: std::path::PathBuf::from("."),
            per_file_ignore_rules,
        }
    }

    /// Builder-style method to set the analysis root.
    #[must_use]
    pub fn with_root(mut self, root: std::path::PathBuf) -> Self {
        self.analysis_root = root;
        self
    }

    /// Builder-style method to set verbose mode.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder-style method to enable formatting rules.
    #[must_use]
    pub fn with_formatting(mut self, enabled: bool) -> Self {
        self.enable_formatting = enabled;
        self
    }

    /// Builder-style method to enable optional-safety rules.
    #[must_use]
    pub fn with_safety(mut self, enabled: bool) -> Self {
        self.enable_safety = enabled;
        self
    }

    /// Builder-style method to enable idiom rules.
    #[must_use]
    pub fn with_idiom(mut self, enabled: bool) -> Self {
        self.enable_idiom = enabled;
        self
    }

    /// Builder-style method to enable naming rules.
    #[must_use]
    pub fn with_naming(mut self, enabled: bool) -> Self {
        self.enable_naming = enabled;
        self
    }

    /// Builder-style method to enable Clean Architecture rules.
    #[must_use]
    pub fn with_architecture(mut self, enabled: bool) -> Self {
        self.enable_architecture = enabled;
        self
    }

    /// Builder-style method to include test files.
    #[must_use]
    pub fn with_tests(mut self, include: bool) -> Self {
        self.include_tests = include;
        self
    }

    /// Builder-style method to set excluded folders.
    #[must_use]
    pub fn with_excludes(mut self, folders: Vec<String>) -> Self {
        self.exclude_folders = folders;
        self
    }

    /// Builder-style method to set included folders.
    #[must_use]
    pub fn with_includes(mut self, folders: Vec<String>) -> Self {
        self.include_folders = folders;
        self
    }

    /// Builder-style method to set config.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self.per_file_ignore_rules =
            build_per_file_ignore_rules(self.config.style.per_file_ignores.as_ref());
        self
    }

    /// Counts the total number of Swift files that would be analyzed.
    /// Useful for setting up a progress bar before analysis.
    /// Respects .gitignore files in addition to hardcoded defaults, and
    /// applies the same test-file filter as the analysis itself.
    #[must_use]
    pub fn count_files(&self, paths: &[std::path::PathBuf]) -> usize {
        paths
            .iter()
            .map(|path| {
                let files = super::traversal::collect_swift_files(
                    path,
                    &self.exclude_folders,
                    &self.include_folders,
                    self.verbose,
                );
                if self.include_tests {
                    files.len()
                } else {
                    files
                        .iter()
                        .filter(|p| !crate::utils::is_test_path(&p.to_string_lossy()))
                        .count()
                }
            })
            .sum()
    }
}

fn build_per_file_ignore_rules(
    per_file_ignores: Option<&FxHashMap<String, Vec<String>>>,
) -> Vec<PerFileIgnoreRule> {
    let mut rules = Vec::new();
    if let Some(mapping) = per_file_ignores {
        for (pattern, ids) in mapping {
            match GlobBuilder::new(pattern).literal_separator(true).build() {
                Ok(glob) => {
                    let rule_ids = ids
                        .iter()
                        .map(|id| id.trim().to_uppercase())
                        .filter(|id| !id.is_empty())
                        .collect::<FxHashSet<_>>();

                    if rule_ids.is_empty() {
                        continue;
                    }

                    rules.push(PerFileIgnoreRule {
                        matcher: glob.compile_matcher(),
                        rule_ids,
                    });
                }
                Err(err) => {
                    eprintln!("[WARN] Skipping invalid per-file ignore glob '{pattern}': {err}");
                }
            }
        }
    }
    rules
}
