use crate::cli::Cli;

pub(crate) struct AppConfig {
    pub(crate) config: crate::config::Config,
    pub(crate) exclude_folders: Vec<String>,
    pub(crate) include_folders: Vec<String>,
    pub(crate) include_tests: bool,
}

/// Loads project configuration and merges it with CLI flags.
pub(crate) fn setup_configuration(effective_paths: &[std::path::PathBuf], cli: &Cli) -> AppConfig {
    let config_path = effective_paths
        .first()
        .map_or(std::path::Path::new("."), std::path::PathBuf::as_path);
    let mut config = crate::config::Config::load_from_path(config_path);

    // CLI thresholds override config so analysis stays consistent.
    if let Some(value) = cli.max_line_length {
        config.style.max_line_length = Some(value);
    }

    let mut exclude_folders = config.style.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli.exclude_folders.clone());

    let include_tests = cli.include.include_tests || config.style.include_tests.unwrap_or(false);

    let mut include_folders = config.style.include_folders.clone().unwrap_or_default();
    include_folders.extend(cli.include_folders.clone());

    AppConfig {
        config,
        exclude_folders,
        include_folders,
        include_tests,
    }
}

/// Resolves whether a rule category is enabled.
///
/// Passing any category flag on the CLI restricts the run to exactly the
/// flagged categories; otherwise the config decides, defaulting to enabled.
pub(crate) fn resolve_category_flag(
    cli_flag: bool,
    any_cli_flag: bool,
    config_flag: Option<bool>,
) -> bool {
    if any_cli_flag {
        cli_flag
    } else {
        config_flag.unwrap_or(true)
    }
}
