//! Naming rules: UpperCamelCase types, lowerCamelCase members.

use super::{create_finding, ids, Context, Finding, Rule, RuleMetadata};
use crate::constants::{LOWER_CAMEL_RE, UPPER_CAMEL_RE};
use crate::syntax::SwiftFile;

const META_TYPE_NAME: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_TYPE_NAME,
};
const META_MEMBER_NAME: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_MEMBER_NAME,
};

const TYPE_KEYWORDS: &[&str] = &[
    "class",
    "struct",
    "enum",
    "protocol",
    "actor",
    "typealias",
    "associatedtype",
];

/// Returns the naming rules.
#[must_use]
pub fn get_naming_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(TypeNameRule), Box::new(MemberNameRule)]
}

struct TypeNameRule;

impl Rule for TypeNameRule {
    fn name(&self) -> &'static str {
        "TypeNameRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_TYPE_NAME
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for (i, t) in toks.iter().enumerate() {
            if !TYPE_KEYWORDS.iter().any(|kw| t.is_anon(kw)) {
                continue;
            }
            // `class func` / `class var`: the keyword is a modifier here and
            // the next token is not an identifier, so it falls through.
            let Some(name) = toks.get(i + 1) else {
                continue;
            };
            if !name.is_identifier() || name.text.starts_with('`') {
                continue;
            }
            if !UPPER_CAMEL_RE().is_match(&name.text) {
                findings.push(create_finding(
                    &format!("Type name '{}' should be UpperCamelCase", name.text),
                    META_TYPE_NAME,
                    context,
                    name.line,
                    name.col,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}

struct MemberNameRule;

impl Rule for MemberNameRule {
    fn name(&self) -> &'static str {
        "MemberNameRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_MEMBER_NAME
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for (i, t) in toks.iter().enumerate() {
            if !(t.is_anon("func") || t.is_anon("let") || t.is_anon("var")) {
                continue;
            }
            if i > 0 && toks[i - 1].is_anon("import") {
                continue;
            }
            // Operator funcs, tuple destructuring, and `let _` all put a
            // non-identifier after the keyword.
            let Some(name) = toks.get(i + 1) else {
                continue;
            };
            if !name.is_identifier() || name.text.starts_with('`') || name.text == "_" {
                continue;
            }
            if !LOWER_CAMEL_RE().is_match(&name.text) {
                findings.push(create_finding(
                    &format!(
                        "Name '{}' should be lowerCamelCase (constants included)",
                        name.text
                    ),
                    META_MEMBER_NAME,
                    context,
                    name.line,
                    name.col,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}
