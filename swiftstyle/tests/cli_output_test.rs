//! End-to-end tests driving the CLI entry point with captured output.
#![allow(clippy::unwrap_used)]

use swiftstyle::entry_point::run_with_args_to;
use tempfile::tempdir;

fn run(args: &[&str]) -> (i32, String) {
    let mut buffer: Vec<u8> = Vec::new();
    let code = run_with_args_to(
        args.iter().map(|s| (*s).to_owned()).collect(),
        &mut buffer,
    )
    .unwrap();
    (code, String::from_utf8_lossy(&buffer).into_owned())
}

#[test]
fn help_is_displayed_with_exit_zero() {
    let (code, output) = run(&["--help"]);
    assert_eq!(code, 0);
    assert!(output.contains("Usage"));
    assert!(output.contains("--json"));
}

#[test]
fn version_is_displayed_with_exit_zero() {
    let (code, output) = run(&["--version"]);
    assert_eq!(code, 0);
    assert!(output.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flags_exit_nonzero() {
    let (code, _) = run(&["--definitely-not-a-flag"]);
    assert_eq!(code, 1);
}

#[test]
fn json_output_is_valid_and_carries_findings() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let name = user!.name\n").unwrap();

    let (code, output) = run(&[temp.path().to_str().unwrap(), "--json"]);
    assert_eq!(code, 0);

    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    let safety = value["safety"].as_array().unwrap();
    assert!(safety.iter().any(|f| f["rule_id"] == "SWS-S201"));
    assert_eq!(value["summary"]["total_files"], 1);
}

#[test]
fn clean_code_reports_all_clean() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let name = user?.name\n").unwrap();

    let (code, output) = run(&[temp.path().to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(output.contains("All clean!"));
}

#[test]
fn fail_on_findings_sets_the_exit_code() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let name = user!.name\n").unwrap();

    let (code, _) = run(&[temp.path().to_str().unwrap(), "--fail-on-findings", "--json"]);
    assert_eq!(code, 1);

    std::fs::write(temp.path().join("Main.swift"), "let name = user?.name\n").unwrap();
    let (code, _) = run(&[temp.path().to_str().unwrap(), "--fail-on-findings", "--json"]);
    assert_eq!(code, 0);
}

#[test]
fn category_flags_narrow_the_scan() {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("Main.swift"),
        "let name = user!.name;\n",
    )
    .unwrap();

    // Only formatting requested, so the force unwrap must not appear.
    let (code, output) = run(&[temp.path().to_str().unwrap(), "--formatting", "--json"]);
    assert_eq!(code, 0);
    let value: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert!(value["safety"].as_array().unwrap().is_empty());
    assert!(value["formatting"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["rule_id"] == "SWS-F104"));
}

#[test]
fn rules_subcommand_lists_the_catalog() {
    let (code, output) = run(&["rules", "--json"]);
    assert_eq!(code, 0);
    let rows: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    let rows = rows.as_array().unwrap();
    assert!(rows.iter().any(|r| r["id"] == "SWS-S201"));
    assert!(rows.iter().any(|r| r["id"] == "SWS-A502"));
}

#[test]
fn files_subcommand_reports_line_metrics() {
    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("Main.swift"),
        "// header\n\nlet a = 1\n",
    )
    .unwrap();

    let (code, output) = run(&["files", temp.path().to_str().unwrap(), "--json"]);
    assert_eq!(code, 0);
    let rows: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    let row = &rows.as_array().unwrap()[0];
    assert_eq!(row["code_lines"], 1);
    assert_eq!(row["comment_lines"], 1);
    assert_eq!(row["empty_lines"], 1);
    assert_eq!(row["total_lines"], 3);
}

#[test]
fn output_file_receives_the_report() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("Main.swift"), "let a = value!\n").unwrap();
    let report_path = temp.path().join("report.json");

    let (code, output) = run(&[
        temp.path().to_str().unwrap(),
        "--json",
        "--output-file",
        report_path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);
    assert!(output.trim().is_empty());

    let written = std::fs::read_to_string(&report_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(written.trim()).unwrap();
    assert!(value["safety"]
        .as_array()
        .unwrap()
        .iter()
        .any(|f| f["rule_id"] == "SWS-S201"));
}
