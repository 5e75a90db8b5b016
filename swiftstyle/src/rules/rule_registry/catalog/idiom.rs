use super::{rule, RuleCategory, RuleDescriptor, RuleSeverity, DOC_IDIOM};
use crate::rules::ids;

pub(crate) const IDIOM_RULES: &[RuleDescriptor] = &[
    rule(
        ids::RULE_ID_PREFER_LET,
        RuleCategory::Idiom,
        RuleSeverity::Low,
        "Variable is never mutated; prefer let over var",
        DOC_IDIOM,
    ),
    rule(
        ids::RULE_ID_EMPTY_PARENS,
        RuleCategory::Idiom,
        RuleSeverity::Low,
        "Empty parentheses before a trailing closure",
        DOC_IDIOM,
    ),
    rule(
        ids::RULE_ID_DEFAULT_BREAK,
        RuleCategory::Idiom,
        RuleSeverity::Medium,
        "default case that only breaks swallows new enum cases",
        DOC_IDIOM,
    ),
];
