//! Formatting rules: whitespace and punctuation layout.

use super::{create_finding, ids, Context, Finding, Rule, RuleMetadata};
use crate::config::Config;
use crate::constants::DEFAULT_MAX_LINE_LENGTH;
use crate::syntax::{SwiftFile, Token};

const META_LINE_LENGTH: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_LINE_LENGTH,
};
const META_TRAILING_WHITESPACE: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_TRAILING_WHITESPACE,
};
const META_TAB_INDENTATION: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_TAB_INDENTATION,
};
const META_TRAILING_SEMICOLON: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_TRAILING_SEMICOLON,
};
const META_COLON_SPACING: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_COLON_SPACING,
};
const META_BRACE_SPACING: RuleMetadata = RuleMetadata {
    id: ids::RULE_ID_BRACE_SPACING,
};

/// Returns the formatting rules, configured from `config`.
#[must_use]
pub fn get_formatting_rules(config: &Config) -> Vec<Box<dyn Rule>> {
    let max_length = config
        .style
        .max_line_length
        .unwrap_or(DEFAULT_MAX_LINE_LENGTH);
    vec![
        Box::new(LineLengthRule { max_length }),
        Box::new(TrailingWhitespaceRule),
        Box::new(TabIndentationRule),
        Box::new(TrailingSemicolonRule),
        Box::new(ColonSpacingRule),
        Box::new(BraceSpacingRule),
    ]
}

struct LineLengthRule {
    max_length: usize,
}

impl Rule for LineLengthRule {
    fn name(&self) -> &'static str {
        "LineLengthRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_LINE_LENGTH
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let mut findings = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            let width = line.chars().count();
            if width > self.max_length {
                findings.push(create_finding(
                    &format!("Line is {width} characters ({} allowed)", self.max_length),
                    META_LINE_LENGTH,
                    context,
                    i + 1,
                    self.max_length + 1,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}

struct TrailingWhitespaceRule;

impl Rule for TrailingWhitespaceRule {
    fn name(&self) -> &'static str {
        "TrailingWhitespaceRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_TRAILING_WHITESPACE
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let mut findings = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            if !line.ends_with(' ') && !line.ends_with('\t') {
                continue;
            }
            // Line ends inside a multi-line string or comment: not ours to police.
            let last_byte = file.line_index.line_start(i + 1) + line.len() - 1;
            if !file.is_code_byte(last_byte) {
                continue;
            }
            let trimmed_width = line.trim_end().chars().count();
            findings.push(create_finding(
                "Trailing whitespace",
                META_TRAILING_WHITESPACE,
                context,
                i + 1,
                trimmed_width + 1,
            ));
        }
        (!findings.is_empty()).then_some(findings)
    }
}

struct TabIndentationRule;

impl Rule for TabIndentationRule {
    fn name(&self) -> &'static str {
        "TabIndentationRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_TAB_INDENTATION
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let mut findings = Vec::new();
        for (i, line) in file.lines.iter().enumerate() {
            let Some(tab_pos) = leading_tab_position(line) else {
                continue;
            };
            let byte = file.line_index.line_start(i + 1) + tab_pos;
            if !file.is_code_byte(byte) {
                continue;
            }
            findings.push(create_finding(
                "Indent with spaces, not tabs",
                META_TAB_INDENTATION,
                context,
                i + 1,
                tab_pos + 1,
            ));
        }
        (!findings.is_empty()).then_some(findings)
    }
}

fn leading_tab_position(line: &str) -> Option<usize> {
    for (i, c) in line.char_indices() {
        match c {
            '\t' => return Some(i),
            ' ' => {}
            _ => return None,
        }
    }
    None
}

struct TrailingSemicolonRule;

impl Rule for TrailingSemicolonRule {
    fn name(&self) -> &'static str {
        "TrailingSemicolonRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_TRAILING_SEMICOLON
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        // Statement terminators are hidden by the grammar and never surface
        // as leaf tokens, so scan the code-masked source text instead.
        let mut findings = Vec::new();
        for (offset, byte) in file.source.bytes().enumerate() {
            if byte != b';' || !file.is_code_byte(offset) {
                continue;
            }
            let line = file.line_index.line_of(offset);
            let col = offset - file.line_index.line_start(line) + 1;
            findings.push(create_finding(
                "Semicolons are not required in Swift",
                META_TRAILING_SEMICOLON,
                context,
                line,
                col,
            ));
        }
        (!findings.is_empty()).then_some(findings)
    }
}

struct ColonSpacingRule;

impl Rule for ColonSpacingRule {
    fn name(&self) -> &'static str {
        "ColonSpacingRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_COLON_SPACING
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for (i, t) in toks.iter().enumerate() {
            if !t.is_anon(":") || t.parent_kind.contains("ternary") {
                continue;
            }
            let prev = if i > 0 { Some(toks[i - 1]) } else { None };
            let next = toks.get(i + 1).copied();
            // Empty dictionary literal `[:]` keeps the colon bare.
            if prev.is_some_and(|p| p.is_anon("["))
                && next.is_some_and(|n| n.is_anon("]"))
            {
                continue;
            }
            if let Some(prev) = prev {
                if prev.line == t.line && !t.adjacent_to(prev) {
                    findings.push(create_finding(
                        "No space before ':'",
                        META_COLON_SPACING,
                        context,
                        t.line,
                        t.col,
                    ));
                    continue;
                }
            }
            if let Some(next) = next {
                // Selector references like `#selector(handle(_:))` pack colons.
                if next.line == t.line && next.adjacent_to(t) && !next.is_anon(")") && !next.is_anon(":")
                {
                    findings.push(create_finding(
                        "Expected a space after ':'",
                        META_COLON_SPACING,
                        context,
                        t.line,
                        t.col,
                    ));
                }
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}

struct BraceSpacingRule;

impl Rule for BraceSpacingRule {
    fn name(&self) -> &'static str {
        "BraceSpacingRule"
    }
    fn metadata(&self) -> RuleMetadata {
        META_BRACE_SPACING
    }
    fn check_file(&mut self, file: &SwiftFile<'_>, context: &Context) -> Option<Vec<Finding>> {
        let toks = file.code_tokens();
        let mut findings = Vec::new();
        for (i, t) in toks.iter().enumerate() {
            if !t.is_anon("{") || i == 0 {
                continue;
            }
            let prev = toks[i - 1];
            if prev.line == t.line {
                if t.adjacent_to(prev) && glues_to_brace(prev) {
                    findings.push(create_finding(
                        "Expected a space before '{'",
                        META_BRACE_SPACING,
                        context,
                        t.line,
                        t.col,
                    ));
                }
            } else if prev.is_anon(")") && t.line == prev.line + 1 {
                findings.push(create_finding(
                    "Opening brace belongs on the declaration line",
                    META_BRACE_SPACING,
                    context,
                    t.line,
                    t.col,
                ));
            }
        }
        (!findings.is_empty()).then_some(findings)
    }
}

fn glues_to_brace(prev: &Token) -> bool {
    prev.is_identifier() || prev.is_anon(")") || prev.is_anon(">") || prev.is_word()
}
