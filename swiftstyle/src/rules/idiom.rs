//! Idiom rules: let-over-var, trailing closures, and switch defaults.

use super::{create_finding, ids, Context, Finding, Rule, RuleMetadata};
use crate::constants::ASSIGNMENT_OPERATORS;
use crate::syntax::SwiftFile;
use compact_str::CompactString;
use rustc_hash::FxHashSet;

const META_PREFER_LET: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_PREFER_LET,
};
const META_EMPTY_PARENS: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_EMPTY_PARENS,
};
const META_DEFAULT_BREAK: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_DEFAULT_BREAK,
};

/// Keywords that own the `{` following a call-shaped `()`, so an empty
/// argument list there is not a removable trailing-closure artifact.
const EMPTY_PARENS_SKIP: &[&str] = &[
    "func",
    "init",
    "deinit",
    "subscript",
    "if",
    "guard",
    "while",
    "for",
    "switch",
    "repeat",
    "catch",
];

/// Returns the idiom rules.
#[must_use]
pub fn get_idiom_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(PreferLetRule),
        Box::new(EmptyParensTrailingClosureRule),
        Box::new(SwitchDefaultBreakRule),
    ]
}

/// Flags `var` bindings that are never mutated.
///
/// The analysis is file-local and deliberately conservative: any
/// reassignment, compound assignment, `inout` pass, or member/subscript
/// access of a same-named identifier suppresses the finding. Computed
/// properties and bindings with accessor/observer blocks (a `{` on the
/// declaration line) are exempt.
struct PreferLetRule;

impl Rule for PreferLetRule {
    fn name(&self) -> &'static str {
        "PreferLetRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_PREFER_LET
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();

        struct Candidate {
            name: CompactString,
            tok_idx: usize,
            line: usize,
            col: usize,
        }
        let mut candidates: Vec<Candidate> = Vec::new();

        for (i, t) in toks.iter().enumerate() {
            if !t.is_anon("var") {
                continue;
            }
            if i > 0 && toks[i - 1].is_anon("import") {
                continue;
            }
            let Some(name) = toks.get(i + 1) else {
                continue;
            };
            if !name.is_identifier() {
                continue;
            }
            let mut has_block = false;
            let mut j = i + 2;
            while let Some(tok) = toks.get(j) {
                if tok.line != t.line {
                    break;
                }
                if tok.is_anon("{") {
                    has_block = true;
                    break;
                }
                j += 1;
            }
            if has_block {
                continue;
            }
            candidates.push(Candidate {
                name: name.text.clone(),
                tok_idx: i + 1,
                line: name.line,
                col: name.col,
            });
        }
        if candidates.is_empty() {
            return None;
        }

        let assign_ops: FxHashSet<&str> = ASSIGNMENT_OPERATORS().iter().copied().collect();
        let decl_sites: FxHashSet<usize> = candidates.iter().map(|c| c.tok_idx).collect();
        let names: FxHashSet<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        let mut mutated: FxHashSet<CompactString> = FxHashSet::default();

        for (i, t) in toks.iter().enumerate() {
            if !t.is_identifier() || decl_sites.contains(&i) || !names.contains(t.text.as_str()) {
                continue;
            }
            let next_mutates = toks.get(i + 1).is_some_and(|n| {
                assign_ops.contains(n.text.as_str()) || n.is_anon(".") || n.is_anon("[")
            });
            let passed_inout = i > 0 && toks[i - 1].is_anon("&");
            if next_mutates || passed_inout {
                mutated.insert(t.text.clone());
            }
        }

        let findings: Vec<Finding> = candidates
            .iter()
            .filter(|c| !mutated.contains(&c.name))
            .map(|c| {
                create_finding(
                    &format!("Variable '{}' is never mutated; prefer 'let'", c.name),
                    META_PREFER_LET,
                    context,
                    c.line,
                    c.col,
                )
            })
            .collect();
        (!findings.is_empty()).then_some(findings)
    }
}

/// Flags `foo() { … }` where the empty argument list before a trailing
/// closure can be dropped.
struct EmptyParensTrailingClosureRule;

impl Rule for EmptyParensTrailingClosureRule {
    fn name(&self) -> &'static str {
        "EmptyParensTrailingClosureRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_EMPTY_PARENS
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for i in 1..toks.len() {
            let t = toks[i];
            if !t.is_anon("(") || !t.adjacent_to(toks[i - 1]) || !toks[i - 1].is_identifier() {
                continue;
            }
            let empty = toks
                .get(i + 1)
                .is_some_and(|n| n.is_anon(")") && n.adjacent_to(t));
            let followed_by_closure = toks
                .get(i + 2)
                .is_some_and(|n| n.is_anon("{") && n.line == t.line);
            if !empty || !followed_by_closure {
                continue;
            }
            // A declaration or condition keyword earlier on the line means the
            // `{` is a body, not a trailing closure.
            let guarded = toks[..i]
                .iter()
                .rev()
                .take_while(|k| k.line == t.line)
                .any(|k| EMPTY_PARENS_SKIP.iter().any(|kw| k.is_anon(kw)));
            if guarded {
                continue;
            }
            findings.push(create_finding(
                "Empty parentheses before a trailing closure can be removed",
                META_EMPTY_PARENS,
                context,
                t.line,
                t.col,
            ));
        }
        (!findings.is_empty()).then_some(findings)
    }
}

/// Flags `default:` cases whose first statement is `break`.
struct SwitchDefaultBreakRule;

impl Rule for SwitchDefaultBreakRule {
    fn name(&self) -> &'static str {
        "SwitchDefaultBreakRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_DEFAULT_BREAK
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for (i, t) in toks.iter().enumerate() {
            // The grammar names this keyword rather than keeping it anonymous.
            if !(t.kind == "default_keyword" || t.is_anon("default")) {
                continue;
            }
            let colon = toks.get(i + 1).is_some_and(|n| n.is_anon(":"));
            let breaks = toks.get(i + 2).is_some_and(|n| n.is_anon("break"));
            if colon && breaks {
                findings.push(create_finding(
                    "default that only breaks silently ignores unhandled cases; assert or throw",
                    META_DEFAULT_BREAK,
                    context,
                    t.line,
                    t.col,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}
