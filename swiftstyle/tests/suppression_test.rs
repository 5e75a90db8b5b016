//! Tests for inline suppression and ignore configuration.
#![allow(clippy::unwrap_used)]

use rustc_hash::FxHashMap;
use swiftstyle::analyzer::SwiftStyle;
use swiftstyle::config::Config;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn inline_ignore_silences_the_whole_line() {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("Main.swift"),
        "let a = user!.name // swiftstyle:ignore\nlet b = user!.name\n",
    )
    .unwrap();
    let mut analyzer = SwiftStyle::default().with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);

    let unwraps: Vec<usize> = result
        .safety
        .iter()
        .filter(|f| f.rule_id == "SWS-S201")
        .map(|f| f.line)
        .collect();
    assert_eq!(unwraps, vec![2]);
}

#[test]
fn inline_ignore_with_ids_silences_only_those_rules() {
    let temp = tempdir().unwrap();
    // The semicolon is listed, the force unwrap is not.
    std::fs::write(
        temp.path().join("Main.swift"),
        "let a = user!.name; // swiftstyle:ignore SWS-F104\n",
    )
    .unwrap();
    let mut analyzer = SwiftStyle::default().with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);

    assert!(!result.formatting.iter().any(|f| f.rule_id == "SWS-F104"));
    assert!(result.safety.iter().any(|f| f.rule_id == "SWS-S201"));
}

#[test]
fn global_ignore_list_drops_rules_everywhere() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let a = 1;\nlet b = 2;\n").unwrap();

    let mut config = Config::default();
    config.style.ignore = Some(vec!["SWS-F104".to_owned()]);
    let mut analyzer = SwiftStyle::default()
        .with_config(config)
        .with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);

    assert!(!result.formatting.iter().any(|f| f.rule_id == "SWS-F104"));
}

#[test]
fn per_file_ignore_rules_apply() {
    let mut mapping = FxHashMap::default();
    mapping.insert("Tests/*".to_owned(), vec!["SWS-S201".to_owned()]);
    mapping.insert("Sources/Legacy.swift".to_owned(), vec!["SWS-F104".to_owned()]);

    let mut config = Config::default();
    config.style.per_file_ignores = Some(mapping);

    let analyzer = SwiftStyle::new(
        true,
        true,
        true,
        true,
        true,
        false,
        Vec::new(),
        Vec::new(),
        config,
    )
    .with_root(PathBuf::from("project"));

    assert!(analyzer.is_rule_ignored_for_path(Path::new("project/Tests/CaseTests.swift"), "sws-s201"));
    assert!(!analyzer.is_rule_ignored_for_path(Path::new("project/Tests/CaseTests.swift"), "SWS-F104"));
    assert!(analyzer.is_rule_ignored_for_path(Path::new("project/Sources/Legacy.swift"), "SWS-F104"));
    assert!(!analyzer.is_rule_ignored_for_path(Path::new("project/Sources/Legacy.swift"), "SWS-S201"));
}

#[test]
fn per_file_ignore_suppresses_findings_in_analysis() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Legacy.swift"), "let a = value!\n").unwrap();

    let mut mapping = FxHashMap::default();
    mapping.insert("Legacy.swift".to_owned(), vec!["SWS-S201".to_owned()]);
    let mut config = Config::default();
    config.style.per_file_ignores = Some(mapping);

    let mut analyzer = SwiftStyle::default()
        .with_config(config)
        .with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);

    assert!(!result.safety.iter().any(|f| f.rule_id == "SWS-S201"));
}

#[test]
fn count_files_applies_the_test_file_filter() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("Tests")).unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let a = 1\n").unwrap();
    std::fs::write(temp.path().join("Tests/UserTests.swift"), "let b = 2\n").unwrap();

    let paths = vec![temp.path().to_path_buf()];
    assert_eq!(SwiftStyle::default().count_files(&paths), 1);
    assert_eq!(SwiftStyle::default().with_tests(true).count_files(&paths), 2);
}

#[test]
fn test_files_are_skipped_unless_included() {
    let temp = tempdir().unwrap();
    std::fs::create_dir_all(temp.path().join("Tests")).unwrap();
    std::fs::write(temp.path().join("Tests/UserTests.swift"), "let a = value!\n").unwrap();

    let mut analyzer = SwiftStyle::default().with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);
    assert_eq!(result.summary.total_files, 0);

    let mut analyzer = SwiftStyle::default()
        .with_tests(true)
        .with_root(temp.path().to_path_buf());
    let result = analyzer.analyze_paths(&[temp.path().to_path_buf()]);
    assert_eq!(result.summary.total_files, 1);
    assert!(result.safety.iter().any(|f| f.rule_id == "SWS-S201"));
}
