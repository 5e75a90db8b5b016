//! Tests for Clean Architecture layering rule behavior.
#![allow(clippy::unwrap_used)]

use swiftstyle::analyzer::{AnalysisResult, SwiftStyle};
use swiftstyle::config::Config;
use std::path::Path;
use tempfile::tempdir;

fn check_project(files: &[(&str, &str)], config: Config) -> AnalysisResult {
    let temp = tempdir().unwrap();
    for (rel, source) in files {
        let path = temp.path().join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, source).unwrap();
    }
    let mut analyzer = SwiftStyle::default()
        .with_config(config)
        .with_root(temp.path().to_path_buf());
    analyzer.analyze_paths(&[temp.path().to_path_buf()])
}

#[test]
fn domain_layer_must_not_import_frameworks() {
    let result = check_project(
        &[(
            "Sources/Domain/User.swift",
            "import Foundation\nimport UIKit\n\nstruct User {}\n",
        )],
        Config::default(),
    );
    let finding = result
        .architecture
        .iter()
        .find(|f| f.rule_id == "SWS-A501")
        .unwrap();
    assert_eq!(finding.line, 2);
    assert!(finding.message.contains("UIKit"));
}

#[test]
fn foundation_is_allowed_in_domain() {
    let result = check_project(
        &[(
            "Sources/Domain/User.swift",
            "import Foundation\n\nstruct User {}\n",
        )],
        Config::default(),
    );
    assert!(result.architecture.is_empty());
}

#[test]
fn presentation_must_not_import_data_modules() {
    let result = check_project(
        &[(
            "Sources/Presentation/ListView.swift",
            "import SwiftUI\nimport CoreData\n\nstruct ListView {}\n",
        )],
        Config::default(),
    );
    let finding = result
        .architecture
        .iter()
        .find(|f| f.rule_id == "SWS-A502")
        .unwrap();
    assert!(finding.message.contains("CoreData"));
}

#[test]
fn data_layer_must_not_import_ui_frameworks() {
    let result = check_project(
        &[(
            "Sources/Data/UserStore.swift",
            "import CoreData\nimport UIKit\n\nfinal class UserStore {}\n",
        )],
        Config::default(),
    );
    assert!(result
        .architecture
        .iter()
        .any(|f| f.rule_id == "SWS-A502" && f.message.contains("UIKit")));
}

#[test]
fn files_outside_layer_directories_are_exempt() {
    let result = check_project(
        &[(
            "Sources/Shared/Helpers.swift",
            "import UIKit\nimport CoreData\n",
        )],
        Config::default(),
    );
    assert!(result.architecture.is_empty());
}

#[test]
fn directories_above_the_analysis_root_do_not_classify() {
    let temp = tempdir().unwrap();
    // The checkout itself lives under a directory named Data.
    let root = temp.path().join("Data").join("MyApp");
    let file = root.join("Sources/Shared/Helpers.swift");
    std::fs::create_dir_all(file.parent().unwrap()).unwrap();
    std::fs::write(&file, "import UIKit\n").unwrap();

    let mut analyzer = SwiftStyle::default().with_root(root.clone());
    let result = analyzer.analyze_paths(&[root]);
    assert!(result.architecture.is_empty());
}

#[test]
fn layer_directories_are_configurable() {
    let mut config = Config::default();
    config.style.layers.domain_dirs = vec!["Core".to_owned()];
    let result = check_project(
        &[("Sources/Core/Entity.swift", "import UIKit\n")],
        config,
    );
    assert!(result
        .architecture
        .iter()
        .any(|f| f.rule_id == "SWS-A501"
            && f.file.ends_with(Path::new("Core/Entity.swift"))));
}
