//! Tests for idiom rule behavior.
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
    result.idiom.iter().map(|f| f.rule_id.clone()).collect()
}

#[test]
fn unmutated_var_prefers_let() {
    let result = check("func f() {\n    var total = 10\n    print(total)\n}\n");
    let finding = result
        .idiom
        .iter()
        .find(|f| f.rule_id == "SWS-Q301")
        .unwrap();
    assert_eq!(finding.line, 2);
    assert!(finding.message.contains("total"));
}

#[test]
fn reassigned_var_is_not_flagged() {
    let result = check("func f() {\n    var n = 0\n    n += 1\n    print(n)\n}\n");
    assert!(!rule_ids(&result).contains(&"SWS-Q301".to_owned()));
}

#[test]
fn member_mutation_suppresses_prefer_let() {
    let result = check("func f() {\n    var user = User()\n    user.name = \"a\"\n}\n");
    assert!(!rule_ids(&result).contains(&"SWS-Q301".to_owned()));
}

#[test]
fn computed_property_is_not_flagged() {
    let result = check("var area: Int { width * height }\n");
    assert!(!rule_ids(&result).contains(&"SWS-Q301".to_owned()));
}

#[test]
fn empty_parens_before_trailing_closure_are_flagged() {
    let result = check("items.forEach() { print($0) }\n");
    assert!(rule_ids(&result).contains(&"SWS-Q302".to_owned()));

    let result = check("items.forEach { print($0) }\n");
    assert!(!rule_ids(&result).contains(&"SWS-Q302".to_owned()));
}

#[test]
fn function_declarations_are_not_trailing_closures() {
    let result = check("func reload() {\n    print(\"ok\")\n}\n");
    assert!(!rule_ids(&result).contains(&"SWS-Q302".to_owned()));
}

#[test]
fn default_that_only_breaks_is_flagged() {
    let source = "switch value {\ncase .a:\n    run()\ndefault:\n    break\n}\n";
    let result = check(source);
    let finding = result
        .idiom
        .iter()
        .find(|f| f.rule_id == "SWS-Q303")
        .unwrap();
    assert_eq!(finding.line, 4);
}

#[test]
fn default_with_real_handling_is_not_flagged() {
    let source = "switch value {\ncase .a:\n    run()\ndefault:\n    handleUnknown()\n}\n";
    let result = check(source);
    assert!(!rule_ids(&result).contains(&"SWS-Q303".to_owned()));
}
