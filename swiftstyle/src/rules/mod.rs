use crate::config::Config;
use crate::syntax::SwiftFile;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
/// Context passed to rules during analysis.
pub struct Context {
    /// Path to the file being checked.
    pub filename: PathBuf,
    /// Clean Architecture layer the file belongs to, if any.
    pub layer: Option<architecture::Layer>,
    /// Configuration settings.
    pub config: Config,
}

#[derive(Debug, Clone, Serialize)]
/// A single issue found by a rule.
pub struct Finding {
    /// ID of the rule that triggered the finding.
    pub rule_id: String,
    /// Rule category (Formatting, Safety, Idiom, Naming, Architecture).
    pub category: String,
    /// Severity level (e.g., "LOW", "HIGH").
    pub severity: String,
    /// Description of the issue.
    pub message: String,
    /// File where the issue was found.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

/// Static identity of a rule, resolved against the registry for category
/// and default severity.
#[derive(Debug, Clone, Copy)]
pub struct RuleMetadata {
    /// Stable rule identifier (for example `SWS-S201`).
    pub id: &'static str,
}

/// Trait defining a style rule.
///
/// Every rule is an independent pattern-match-and-report check over a single
/// file's token stream and lines. Rules share no state and have no ordering
/// dependency between them.
pub trait Rule: Send + Sync {
    /// Returns the descriptive name of the rule.
    fn name(&self) -> &'static str;
    /// Returns the rule's identity.
    fn metadata(&self) -> RuleMetadata;
    /// Checks one parsed file, returning any findings.
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>>;
}

mod finding;
pub use finding::create_finding;

/// Stable rule ID constants.
pub mod ids;

/// Module containing Clean Architecture layering rules.
pub mod architecture;
/// Module containing formatting rules.
pub mod formatting;
/// Module containing idiom rules.
pub mod idiom;
/// Module containing naming rules.
pub mod naming;
/// Typed metadata registry for all rule IDs.
pub mod rule_registry;
/// Module containing optional-safety rules.
pub mod safety;
