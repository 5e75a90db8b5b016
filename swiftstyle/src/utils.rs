use crate::constants::{DEFAULT_EXCLUDE_FOLDERS, SUPPRESSION_RE, TEST_FILE_RE};
use rustc_hash::{FxHashMap, FxHashSet};

/// A utility struct to convert byte offsets to line numbers.
///
/// The parser works with byte offsets, but findings are reported with
/// line/column numbers which are more human-readable.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Stores the byte index of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Creates a new `LineIndex` by scanning the source code for newlines.
    /// Uses byte iteration since '\n' is always a single byte in UTF-8.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, byte) in source.as_bytes().iter().enumerate() {
            if *byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Converts a byte offset to a 1-indexed line number.
    #[must_use]
    pub fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(line) => line + 1,
            Err(line) => line,
        }
    }

    /// Returns the byte offset at which the given 1-indexed line starts.
    #[must_use]
    pub fn line_start(&self, line: usize) -> usize {
        self.line_starts.get(line - 1).copied().unwrap_or(0)
    }
}

/// Inline suppression parsed from a `// swiftstyle:ignore` comment.
#[derive(Debug, Clone)]
pub enum Suppression {
    /// Every rule is silenced on this line.
    All,
    /// Only the listed rule IDs are silenced on this line.
    Rules(FxHashSet<String>),
}

/// Scans the source for inline suppression comments.
///
/// Returns a map from 1-indexed line number to the suppression that applies
/// there. `// swiftstyle:ignore` silences the whole line; listing rule IDs
/// after it silences only those rules.
#[must_use]
pub fn get_suppressed_lines(source: &str) -> FxHashMap<usize, Suppression> {
    let mut suppressed = FxHashMap::default();
    for (i, line) in source.lines().enumerate() {
        let Some(caps) = SUPPRESSION_RE().captures(line) else {
            continue;
        };
        let suppression = match caps.get(1) {
            Some(rules) if !rules.as_str().trim().is_empty() => {
                let ids = rules
                    .as_str()
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|s| !s.is_empty())
                    .map(str::to_uppercase)
                    .collect();
                Suppression::Rules(ids)
            }
            _ => Suppression::All,
        };
        suppressed.insert(i + 1, suppression);
    }
    suppressed
}

/// Checks whether a rule is suppressed on the given line.
#[must_use]
pub fn is_line_suppressed(
    suppressed: &FxHashMap<usize, Suppression>,
    line: usize,
    rule_id: &str,
) -> bool {
    match suppressed.get(&line) {
        Some(Suppression::All) => true,
        Some(Suppression::Rules(ids)) => ids.contains(&rule_id.to_uppercase()),
        None => false,
    }
}

/// Checks if a path is a test path (`Tests/`, `FooTests.swift`, `FooSpec.swift`).
#[must_use]
pub fn is_test_path(p: &str) -> bool {
    TEST_FILE_RE().is_match(p)
}

/// Parses exclude folders, combining defaults with user inputs.
pub fn parse_exclude_folders<S: std::hash::BuildHasher>(
    user_exclude_folders: Option<std::collections::HashSet<String, S>>,
    use_defaults: bool,
    include_folders: Option<std::collections::HashSet<String, S>>,
) -> FxHashSet<String> {
    let mut exclude_folders = FxHashSet::default();

    if use_defaults {
        for folder in DEFAULT_EXCLUDE_FOLDERS() {
            exclude_folders.insert((*folder).to_owned());
        }
    }

    if let Some(user_folders) = user_exclude_folders {
        exclude_folders.extend(user_folders);
    }

    if let Some(include) = include_folders {
        for folder in include {
            exclude_folders.remove(&folder);
        }
    }

    exclude_folders
}

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
///
/// # Examples
/// ```
/// use std::path::Path;
/// use swiftstyle::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\Sources\\App.swift")), "Sources/App.swift");
/// assert_eq!(normalize_display_path(Path::new("./Sources/App.swift")), "Sources/App.swift");
/// ```
#[must_use]
pub fn normalize_display_path(path: &std::path::Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}
