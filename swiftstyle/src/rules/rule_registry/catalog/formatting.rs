use super::{rule, RuleCategory, RuleDescriptor, RuleSeverity, DOC_FORMATTING};
use crate::rules::ids;

pub(crate) const FORMATTING_RULES: &[RuleDescriptor] = &[
    rule(
        ids::RULE_ID_LINE_LENGTH,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Line exceeds the configured maximum length",
        DOC_FORMATTING,
    ),
    rule(
        ids::RULE_ID_TRAILING_WHITESPACE,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Trailing whitespace at end of line",
        DOC_FORMATTING,
    ),
    rule(
        ids::RULE_ID_TAB_INDENTATION,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Indentation uses tabs instead of spaces",
        DOC_FORMATTING,
    ),
    rule(
        ids::RULE_ID_TRAILING_SEMICOLON,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Semicolons are never required in Swift",
        DOC_FORMATTING,
    ),
    rule(
        ids::RULE_ID_COLON_SPACING,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Colons hug the identifier and take one trailing space",
        DOC_FORMATTING,
    ),
    rule(
        ids::RULE_ID_BRACE_SPACING,
        RuleCategory::Formatting,
        RuleSeverity::Low,
        "Opening braces take a leading space on the declaration line",
        DOC_FORMATTING,
    ),
];
