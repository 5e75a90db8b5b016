use rustc_hash::FxHashMap;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for swiftstyle.
    pub style: StyleConfig,
    /// The path to the configuration file this was loaded from.
    /// Set during `load_from_path`, `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<std::path::PathBuf>,
}

#[derive(Debug, Deserialize, Default, Clone)]
/// Configuration options for swiftstyle.
pub struct StyleConfig {
    /// Whether formatting rules (SWS-F1xx) run.
    pub formatting: Option<bool>,
    /// Whether optional-safety rules (SWS-S2xx) run.
    pub safety: Option<bool>,
    /// Whether idiom rules (SWS-Q3xx) run.
    pub idiom: Option<bool>,
    /// Whether naming rules (SWS-N4xx) run.
    pub naming: Option<bool>,
    /// Whether architecture rules (SWS-A5xx) run.
    pub architecture: Option<bool>,
    /// Whether to include test files.
    pub include_tests: Option<bool>,
    /// Maximum allowed line length in characters.
    pub max_line_length: Option<usize>,
    /// List of folders to exclude.
    pub exclude_folders: Option<Vec<String>>,
    /// List of folders to include.
    pub include_folders: Option<Vec<String>>,
    /// List of rule codes to ignore everywhere.
    pub ignore: Option<Vec<String>>,
    /// Per-file ignore overrides (glob -> rule IDs).
    #[serde(alias = "per-file-ignores")]
    pub per_file_ignores: Option<FxHashMap<String, Vec<String>>>,
    /// Exit with code 1 when any finding is reported (CI gating).
    pub fail_on_findings: Option<bool>,
    /// Clean Architecture layer mapping and module lists.
    #[serde(default)]
    pub layers: LayersConfig,
}

/// Clean Architecture layer conventions.
///
/// Layer membership is decided purely from path components; dependency
/// direction is checked through `import` statements only.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LayersConfig {
    /// Directory names that mark a file as Domain layer.
    pub domain_dirs: Vec<String>,
    /// Directory names that mark a file as Data layer.
    pub data_dirs: Vec<String>,
    /// Directory names that mark a file as Presentation layer.
    pub presentation_dirs: Vec<String>,
    /// Modules the Domain layer is allowed to import.
    pub domain_allowed_imports: Vec<String>,
    /// Modules that belong to the Data layer (persistence, networking).
    pub data_modules: Vec<String>,
    /// UI framework modules.
    pub ui_frameworks: Vec<String>,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self {
            domain_dirs: vec!["Domain".to_owned()],
            data_dirs: vec!["Data".to_owned()],
            presentation_dirs: vec!["Presentation".to_owned(), "UI".to_owned()],
            domain_allowed_imports: vec!["Foundation".to_owned()],
            data_modules: vec![
                "CoreData".to_owned(),
                "Realm".to_owned(),
                "RealmSwift".to_owned(),
                "Alamofire".to_owned(),
                "GRDB".to_owned(),
                "SQLite3".to_owned(),
            ],
            ui_frameworks: vec![
                "UIKit".to_owned(),
                "SwiftUI".to_owned(),
                "AppKit".to_owned(),
                "WatchKit".to_owned(),
            ],
        }
    }
}
