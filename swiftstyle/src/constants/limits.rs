/// Maximum recursion depth for the syntax-tree walk to prevent stack overflow
/// on pathologically nested code.
pub const MAX_RECURSION_DEPTH: usize = 400;
/// Default configuration filename.
pub const CONFIG_FILENAME: &str = ".swiftstyle.toml";
/// Default maximum line length (characters) for the line-length rule.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 120;
/// Minimum number of files before a progress bar is shown.
pub const PROGRESS_BAR_THRESHOLD: usize = 20;
