//! Tests for formatting rule behavior.
#![allow(clippy::unwrap_used)]

use swiftstyle::analyzer::{AnalysisResult, SwiftStyle};
use tempfile::tempdir;

fn check(source: &str) -> AnalysisResult {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), source).unwrap();
    let mut analyzer = SwiftStyle::default().with_root(temp.path().to_path_buf());
    analyzer.analyze_paths(&[temp.path().to_path_buf()])
}

fn rule_ids(result: &AnalysisResult) -> Vec<String> {
    result
        .formatting
        .iter()
        .map(|f| f.rule_id.clone())
        .collect()
}

#[test]
fn line_length_flags_long_lines() {
    let long_line = format!("let s = \"{}\"\n", "x".repeat(130));
    let result = check(&long_line);
    assert!(rule_ids(&result).contains(&"SWS-F101".to_owned()));

    let result = check("let s = \"short\"\n");
    assert!(!rule_ids(&result).contains(&"SWS-F101".to_owned()));
}

#[test]
fn trailing_whitespace_is_flagged_with_position() {
    let result = check("let a = 1 \nlet b = 2\n");
    let finding = result
        .formatting
        .iter()
        .find(|f| f.rule_id == "SWS-F102")
        .unwrap();
    assert_eq!(finding.line, 1);
    assert_eq!(finding.col, 10);
}

#[test]
fn tab_indentation_is_flagged() {
    let result = check("func f() {\n\tlet a = 1\n}\n");
    let finding = result
        .formatting
        .iter()
        .find(|f| f.rule_id == "SWS-F103")
        .unwrap();
    assert_eq!(finding.line, 2);
}

#[test]
fn semicolons_are_flagged() {
    let result = check("let a = 1;\n");
    let finding = result
        .formatting
        .iter()
        .find(|f| f.rule_id == "SWS-F104")
        .unwrap();
    assert_eq!(finding.line, 1);
    assert_eq!(finding.col, 10);

    let result = check("let a = 1\n");
    assert!(!rule_ids(&result).contains(&"SWS-F104".to_owned()));
}

#[test]
fn semicolons_inside_strings_and_comments_are_not_flagged() {
    let result = check("let s = \"a;b\" // trailing; note\n");
    assert!(!rule_ids(&result).contains(&"SWS-F104".to_owned()));
}

#[test]
fn colon_spacing_attaches_left() {
    let result = check("func f(x : Int) -> Int { return x }\n");
    assert!(rule_ids(&result).contains(&"SWS-F105".to_owned()));

    let result = check("func f(x: Int) -> Int { return x }\n");
    assert!(!rule_ids(&result).contains(&"SWS-F105".to_owned()));
}

#[test]
fn colon_spacing_exempts_ternary_and_empty_dictionary() {
    let result = check("let v = flag ? 1 : 2\nvar d: [String: Int] = [:]\n");
    assert!(!rule_ids(&result).contains(&"SWS-F105".to_owned()));
}

#[test]
fn brace_wants_a_leading_space() {
    let result = check("func f(){\n}\n");
    assert!(rule_ids(&result).contains(&"SWS-F106".to_owned()));

    let result = check("func f() {\n}\n");
    assert!(!rule_ids(&result).contains(&"SWS-F106".to_owned()));
}

#[test]
fn allman_braces_are_flagged() {
    let result = check("func f()\n{\n}\n");
    assert!(rule_ids(&result).contains(&"SWS-F106".to_owned()));
}

#[test]
fn max_line_length_is_configurable() {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("Main.swift"),
        format!("let s = \"{}\"\n", "x".repeat(60)),
    )
    .unwrap();
    let mut config = swiftstyle::config::Config::default();
    config.style.max_line_length = Some(40);
    let mut analyzer = SwiftStyle::default()
        .with_config(config)
        .with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);
    assert!(rule_ids(&result).contains(&"SWS-F101".to_owned()));
}
