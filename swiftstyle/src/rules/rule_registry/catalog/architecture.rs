use super::{rule, RuleCategory, RuleDescriptor, RuleSeverity, DOC_ARCHITECTURE};
use crate::rules::ids;

pub(crate) const ARCHITECTURE_RULES: &[RuleDescriptor] = &[
    rule(
        ids::RULE_ID_DOMAIN_IMPORTS,
        RuleCategory::Architecture,
        RuleSeverity::High,
        "Domain layer imports only allow-listed modules",
        DOC_ARCHITECTURE,
    ),
    rule(
        ids::RULE_ID_LAYER_DIRECTION,
        RuleCategory::Architecture,
        RuleSeverity::High,
        "Imports must follow the layer dependency direction",
        DOC_ARCHITECTURE,
    ),
];
