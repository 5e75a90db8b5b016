//! Tests for optional-safety rule behavior.
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
    result.safety.iter().map(|f| f.rule_id.clone()).collect()
}

#[test]
fn force_unwrap_is_flagged() {
    let result = check("let name = user!.name\n");
    let finding = result
        .safety
        .iter()
        .find(|f| f.rule_id == "SWS-S201")
        .unwrap();
    assert_eq!(finding.line, 1);
}

#[test]
fn prefix_negation_is_not_a_force_unwrap() {
    let result = check("let inverted = !flag\n");
    assert!(!rule_ids(&result).contains(&"SWS-S201".to_owned()));
}

#[test]
fn force_cast_is_flagged() {
    let result = check("let s = value as! String\n");
    assert!(rule_ids(&result).contains(&"SWS-S202".to_owned()));

    let result = check("let s = value as? String\n");
    assert!(!rule_ids(&result).contains(&"SWS-S202".to_owned()));
}

#[test]
fn force_try_is_flagged() {
    let result = check("let data = try! load()\n");
    assert!(rule_ids(&result).contains(&"SWS-S203".to_owned()));

    let result = check("let data = try? load()\n");
    assert!(!rule_ids(&result).contains(&"SWS-S203".to_owned()));
}

#[test]
fn implicitly_unwrapped_optional_declaration_is_flagged_as_iuo() {
    let result = check("var delegate: AppDelegate!\n");
    let ids = rule_ids(&result);
    assert!(ids.contains(&"SWS-S204".to_owned()));
    assert!(!ids.contains(&"SWS-S201".to_owned()));
}

#[test]
fn call_site_unwrap_after_argument_label_stays_a_force_unwrap() {
    let result = check("let r = compute(width: width!)\n");
    let ids = rule_ids(&result);
    assert!(ids.contains(&"SWS-S201".to_owned()));
    assert!(!ids.contains(&"SWS-S204".to_owned()));
}

#[test]
fn multiple_forced_operations_report_separately() {
    let result = check("let a = x!\nlet b = y as! Int\nlet c = try! parse()\n");
    let ids = rule_ids(&result);
    assert!(ids.contains(&"SWS-S201".to_owned()));
    assert!(ids.contains(&"SWS-S202".to_owned()));
    assert!(ids.contains(&"SWS-S203".to_owned()));
}
