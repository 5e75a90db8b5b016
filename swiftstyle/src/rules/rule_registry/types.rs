/// Canonical high-level category for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleCategory {
    /// Whitespace and punctuation layout.
    Formatting,
    /// Optional handling and forced operations.
    Safety,
    /// Swift idiom preferences.
    Idiom,
    /// Identifier casing conventions.
    Naming,
    /// Clean Architecture layering conventions.
    Architecture,
}

impl RuleCategory {
    /// Returns the canonical display form for this category.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleCategory::Formatting => "Formatting",
            RuleCategory::Safety => "Safety",
            RuleCategory::Idiom => "Idiom",
            RuleCategory::Naming => "Naming",
            RuleCategory::Architecture => "Architecture",
        }
    }
}

/// Default severity for a rule when no override applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSeverity {
    /// High severity.
    High,
    /// Medium severity.
    Medium,
    /// Low severity.
    Low,
}

impl RuleSeverity {
    /// Returns the canonical display form for this severity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSeverity::High => "HIGH",
            RuleSeverity::Medium => "MEDIUM",
            RuleSeverity::Low => "LOW",
        }
    }
}

/// Strongly typed rule metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleDescriptor {
    /// Stable rule identifier (for example `SWS-S201`).
    pub id: &'static str,
    /// Rule category.
    pub category: RuleCategory,
    /// Default severity for the rule.
    pub default_severity: RuleSeverity,
    /// One-line summary shown by the `rules` subcommand.
    pub summary: &'static str,
    /// Documentation path for end-user guidance.
    pub docs_url: &'static str,
}

pub(super) const fn rule(
    id: &'static str,
    category: RuleCategory,
    default_severity: RuleSeverity,
    summary: &'static str,
    docs_url: &'static str,
) -> RuleDescriptor {
    RuleDescriptor {
        id,
        category,
        default_severity,
        summary,
        docs_url,
    }
}
