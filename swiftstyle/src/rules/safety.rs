//! Optional-safety rules: forced unwraps, casts, tries, and IUO declarations.

use super::{create_finding, ids, Context, Finding, Rule, RuleMetadata};
use crate::syntax::{SwiftFile, Token};
use rustc_hash::FxHashSet;

const META_FORCE_UNWRAP: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_FORCE_UNWRAP,
};
const META_FORCE_CAST: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_FORCE_CAST,
};
const META_FORCE_TRY: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_FORCE_TRY,
};
const META_IUO: RuleMetadata = RuleMetadata { id: ids::RULE_ID_IUO };

/// Returns the optional-safety rules.
#[must_use]
pub fn get_safety_rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(ForcedOperationsRule)]
}

/// Flags every forced operation: postfix `!`, `as!`, `try!`, and implicitly
/// unwrapped optional declarations. One rule, four IDs: the checks share the
/// same bang-token walk and must agree on which `!` belongs to whom.
struct ForcedOperationsRule;

impl Rule for ForcedOperationsRule {
    fn name(&self) -> &'static str {
        "ForcedOperationsRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_FORCE_UNWRAP
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let iuo_bangs = collect_iuo_bangs(&toks);
        let mut findings = Vec::new();

        for (i, t) in toks.iter().enumerate() {
            // Some grammar versions lex `as!`/`try!` as a single token.
            if t.text == "as!" {
                findings.push(create_finding(
                    "Force cast; prefer 'as?' with optional binding",
                    META_FORCE_CAST,
                    context,
                    t.line,
                    t.col,
                ));
                continue;
            }
            if t.text == "try!" {
                findings.push(create_finding(
                    "Force try; prefer do/catch or 'try?'",
                    META_FORCE_TRY,
                    context,
                    t.line,
                    t.col,
                ));
                continue;
            }
            if !is_bang(t) || i == 0 {
                continue;
            }
            let prev = toks[i - 1];
            if !t.adjacent_to(prev) {
                continue; // prefix negation or line break
            }
            if prev.is_anon("try") {
                findings.push(create_finding(
                    "Force try; prefer do/catch or 'try?'",
                    META_FORCE_TRY,
                    context,
                    prev.line,
                    prev.col,
                ));
            } else if prev.is_anon("as") {
                findings.push(create_finding(
                    "Force cast; prefer 'as?' with optional binding",
                    META_FORCE_CAST,
                    context,
                    prev.line,
                    prev.col,
                ));
            } else if iuo_bangs.contains(&t.start) {
                findings.push(create_finding(
                    "Implicitly unwrapped optional; model absence with a plain optional",
                    META_IUO,
                    context,
                    t.line,
                    t.col,
                ));
            } else if is_postfix_target(prev) {
                findings.push(create_finding(
                    "Force unwrap; prefer 'if let' or 'guard let'",
                    META_FORCE_UNWRAP,
                    context,
                    t.line,
                    t.col,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}

fn is_postfix_target(prev: &Token) -> bool {
    prev.is_identifier() || prev.is_anon(")") || prev.is_anon("]")
}

/// Expression-position `!` surfaces as a named `bang` node in the grammar;
/// type-position and operator bangs stay anonymous. Accept either shape.
fn is_bang(t: &Token) -> bool {
    t.text == "!" && (t.kind == "bang" || t.kind == "!")
}

/// Finds the byte offsets of `!` tokens that terminate a declared type
/// (`var delegate: AppDelegate!`, `let names: [String]!`).
///
/// Type position is recognized lexically: the token after the `:` must start
/// a type (uppercase-initial identifier or `[`), so call-site unwraps like
/// `foo(x: bar!)` keep their force-unwrap classification.
fn collect_iuo_bangs(toks: &[&Token]) -> FxHashSet<usize> {
    let mut bangs = FxHashSet::default();
    for (i, t) in toks.iter().enumerate() {
        if !t.is_anon(":") || t.parent_kind.contains("ternary") {
            continue;
        }
        let Some(first) = toks.get(i + 1) else {
            continue;
        };
        let starts_type = first.is_anon("[")
            || (first.is_identifier()
                && first.text.chars().next().is_some_and(char::is_uppercase));
        if !starts_type {
            continue;
        }
        let mut j = i + 1;
        while let Some(tok) = toks.get(j) {
            if j - i > 16 || tok.line != t.line {
                break;
            }
            if is_bang(tok) {
                if j > 0 && tok.adjacent_to(toks[j - 1]) {
                    bangs.insert(tok.start);
                }
                break;
            }
            let in_type = tok.is_identifier()
                || tok.is_anon(".")
                || tok.is_anon("<")
                || tok.is_anon(">")
                || tok.is_anon("[")
                || tok.is_anon("]")
                || tok.text == "?"
                || tok.is_anon(",");
            if !in_type {
                break;
            }
            j += 1;
        }
    }
    bangs
}
