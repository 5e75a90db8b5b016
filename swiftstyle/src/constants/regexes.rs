use regex::Regex;
use std::sync::OnceLock;

/// Returns the compiled suppression-comment regex.
///
/// Matches `// swiftstyle:ignore` (whole line) and
/// `// swiftstyle:ignore SWS-S201, SWS-F101` (listed rules only).
/// `disable` is accepted as an alias for `ignore`.
pub fn get_suppression_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?i)//\s*swiftstyle:\s*(?:ignore|disable)(?:[:\s]+([A-Z0-9,\-\s]+))?")
            .expect("Invalid suppression regex pattern")
    })
}

/// Returns the compiled regex for test-file path detection.
pub fn get_test_file_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"(?:^|[/\\])Tests?[/\\]|Tests\.swift$|Test\.swift$|Spec\.swift$")
            .expect("Invalid test file regex pattern")
    })
}

/// Returns the compiled regex for UpperCamelCase type names.
pub fn get_upper_camel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").expect("Invalid type name regex pattern"))
}

/// Returns the compiled regex for lowerCamelCase member names.
///
/// A single leading underscore is tolerated for backing-storage properties.
pub fn get_lower_camel_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| {
        Regex::new(r"^_?[a-z][A-Za-z0-9]*$").expect("Invalid member name regex pattern")
    })
}
