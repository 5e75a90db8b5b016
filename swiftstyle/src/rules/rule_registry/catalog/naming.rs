use super::{rule, RuleCategory, RuleDescriptor, RuleSeverity, DOC_NAMING};
use crate::rules::ids;

pub(crate) const NAMING_RULES: &[RuleDescriptor] = &[
    rule(
        ids::RULE_ID_TYPE_NAME,
        RuleCategory::Naming,
        RuleSeverity::Medium,
        "Type names use UpperCamelCase",
        DOC_NAMING,
    ),
    rule(
        ids::RULE_ID_MEMBER_NAME,
        RuleCategory::Naming,
        RuleSeverity::Medium,
        "Functions, variables, and constants use lowerCamelCase",
        DOC_NAMING,
    ),
];
