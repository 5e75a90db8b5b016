pub(crate) mod architecture;
pub(crate) mod formatting;
pub(crate) mod idiom;
pub(crate) mod naming;
pub(crate) mod safety;

use super::types::{rule, RuleCategory, RuleDescriptor, RuleSeverity};

/// Documentation path for formatting rules.
pub const DOC_FORMATTING: &str = "docs/formatting.md";
/// Documentation path for optional-safety rules.
pub const DOC_SAFETY: &str = "docs/safety.md";
/// Documentation path for idiom rules.
pub const DOC_IDIOM: &str = "docs/idiom.md";
/// Documentation path for naming rules.
pub const DOC_NAMING: &str = "docs/naming.md";
/// Documentation path for architecture rules.
pub const DOC_ARCHITECTURE: &str = "docs/architecture.md";
