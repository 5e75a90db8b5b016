//! Typed metadata registry for all rule IDs.

mod catalog;
mod lookup;
mod types;

pub use catalog::{DOC_ARCHITECTURE, DOC_FORMATTING, DOC_IDIOM, DOC_NAMING, DOC_SAFETY};
pub use lookup::{all_rule_descriptors, get_rule_descriptor, rule_registry_by_id};
pub use types::{RuleCategory, RuleDescriptor, RuleSeverity};
