use super::rule_registry::get_rule_descriptor;
use super::{Context, Finding, RuleMetadata};

/// Builds a `Finding`, filling category and severity from the registry.
#[must_use]
pub fn create_finding(
    message: &str,
    meta: RuleMetadata,
    context: &Context,
    line: usize,
    col: usize,
) -> Finding {
    let (category, severity) = get_rule_descriptor(meta.id).map_or_else(
        || ("Style".to_owned(), "MEDIUM".to_owned()),
        |d| {
            (
                d.category.as_str().to_owned(),
                d.default_severity.as_str().to_owned(),
            )
        },
    );
    Finding {
        rule_id: meta.id.to_owned(),
        category,
        severity,
        message: message.to_owned(),
        file: context.filename.clone(),
        line,
        col,
    }
}
