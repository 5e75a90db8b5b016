use super::{rule, RuleCategory, RuleDescriptor, RuleSeverity, DOC_SAFETY};
use crate::rules::ids;

pub(crate) const SAFETY_RULES: &[RuleDescriptor] = &[
    rule(
        ids::RULE_ID_FORCE_UNWRAP,
        RuleCategory::Safety,
        RuleSeverity::High,
        "Force unwrap; prefer optional binding",
        DOC_SAFETY,
    ),
    rule(
        ids::RULE_ID_FORCE_CAST,
        RuleCategory::Safety,
        RuleSeverity::High,
        "Force cast; prefer conditional cast with binding",
        DOC_SAFETY,
    ),
    rule(
        ids::RULE_ID_FORCE_TRY,
        RuleCategory::Safety,
        RuleSeverity::High,
        "Force try; prefer do/catch or try?",
        DOC_SAFETY,
    ),
    rule(
        ids::RULE_ID_IUO,
        RuleCategory::Safety,
        RuleSeverity::Medium,
        "Implicitly unwrapped optional declaration",
        DOC_SAFETY,
    ),
];
