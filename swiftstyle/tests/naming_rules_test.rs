//! Tests for naming rule behavior.
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
    result.naming.iter().map(|f| f.rule_id.clone()).collect()
}

#[test]
fn lowercase_type_names_are_flagged() {
    let result = check("struct loginViewModel {}\n");
    let finding = result
        .naming
        .iter()
        .find(|f| f.rule_id == "SWS-N401")
        .unwrap();
    assert!(finding.message.contains("loginViewModel"));
}

#[test]
fn snake_case_type_names_are_flagged() {
    let result = check("class User_Profile {}\n");
    assert!(rule_ids(&result).contains(&"SWS-N401".to_owned()));
}

#[test]
fn upper_camel_case_types_pass() {
    let result = check("struct LoginViewModel {}\nenum NetworkError {}\nprotocol URLBuilder {}\n");
    assert!(!rule_ids(&result).contains(&"SWS-N401".to_owned()));
}

#[test]
fn screaming_snake_constants_are_flagged() {
    let result = check("let MAX_RETRY_COUNT = 3\n");
    let finding = result
        .naming
        .iter()
        .find(|f| f.rule_id == "SWS-N402")
        .unwrap();
    assert!(finding.message.contains("MAX_RETRY_COUNT"));
}

#[test]
fn lower_camel_members_pass() {
    let result = check("let maxRetryCount = 3\nfunc fetchUser() {}\nvar _backingStore = 0\n");
    assert!(!rule_ids(&result).contains(&"SWS-N402".to_owned()));
}

#[test]
fn uppercase_function_names_are_flagged() {
    let result = check("func FetchUser() {}\n");
    assert!(rule_ids(&result).contains(&"SWS-N402".to_owned()));
}

#[test]
fn imports_are_not_member_declarations() {
    let result = check("import Foundation\nimport UIKit\n");
    assert!(rule_ids(&result).is_empty());
}

#[test]
fn wildcard_bindings_are_exempt() {
    let result = check("let _ = compute()\n");
    assert!(!rule_ids(&result).contains(&"SWS-N402".to_owned()));
}
