//! Raw line metrics (LOC, SLOC, comments, blank).
//!
//! Implemented as a textual scanner rather than on top of the parsed token
//! stream so the `files` subcommand stays cheap and works on files the
//! grammar cannot fully parse. Swift block comments nest, so a depth counter
//! is kept instead of a boolean.

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Raw metrics gathered from source code analysis.
pub struct RawMetrics {
    /// Total lines.
    pub loc: usize,
    /// Source lines of code (non-blank, non-comment).
    pub sloc: usize,
    /// Comment lines (full-line `//` comments and `/* */` interiors).
    pub comments: usize,
    /// Blank lines.
    pub blank: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LineType {
    Blank,
    Code,
    Comment,
}

/// Analyzes raw metrics from Swift source.
#[must_use]
pub fn analyze_raw(code: &str) -> RawMetrics {
    let mut metrics = RawMetrics::default();
    // Depth of nested /* */ comments, carried across lines.
    let mut block_depth = 0usize;

    for line in code.lines() {
        metrics.loc += 1;
        let line_type = classify_line(line, &mut block_depth);
        match line_type {
            LineType::Blank => metrics.blank += 1,
            LineType::Comment => metrics.comments += 1,
            LineType::Code => metrics.sloc += 1,
        }
    }

    metrics
}

fn classify_line(line: &str, block_depth: &mut usize) -> LineType {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return if *block_depth > 0 {
            LineType::Comment
        } else {
            LineType::Blank
        };
    }

    let mut saw_code = false;
    let mut saw_comment = *block_depth > 0;
    let mut in_string = false;
    let bytes = trimmed.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if *block_depth > 0 {
            saw_comment = true;
            if bytes[i..].starts_with(b"/*") {
                *block_depth += 1;
                i += 2;
            } else if bytes[i..].starts_with(b"*/") {
                *block_depth -= 1;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }
        if in_string {
            if bytes[i] == b'\\' {
                i += 2;
                continue;
            }
            if bytes[i] == b'"' {
                in_string = false;
            }
            i += 1;
            continue;
        }
        if bytes[i..].starts_with(b"//") {
            saw_comment = true;
            break; // rest of the line is comment
        }
        if bytes[i..].starts_with(b"/*") {
            saw_comment = true;
            *block_depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == b'"' {
            in_string = true;
            saw_code = true;
            i += 1;
            continue;
        }
        if !bytes[i].is_ascii_whitespace() {
            saw_code = true;
        }
        i += 1;
    }

    if saw_code {
        LineType::Code
    } else if saw_comment {
        LineType::Comment
    } else {
        LineType::Blank
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_code_comment_and_blank_lines() {
        let source = "import Foundation\n\n// greet the user\nfunc greet() {}\n";
        let m = analyze_raw(source);
        assert_eq!(m.loc, 4);
        assert_eq!(m.sloc, 2);
        assert_eq!(m.comments, 1);
        assert_eq!(m.blank, 1);
    }

    #[test]
    fn nested_block_comments_stay_comments() {
        let source = "/* outer\n/* inner */\nstill comment */\nlet x = 1\n";
        let m = analyze_raw(source);
        assert_eq!(m.comments, 3);
        assert_eq!(m.sloc, 1);
    }

    #[test]
    fn comment_markers_inside_strings_are_code() {
        let source = "let url = \"https://example.com\"\n";
        let m = analyze_raw(source);
        assert_eq!(m.sloc, 1);
        assert_eq!(m.comments, 0);
    }

    #[test]
    fn trailing_comment_counts_line_as_code() {
        let source = "let x = 1 // inline\n";
        let m = analyze_raw(source);
        assert_eq!(m.sloc, 1);
        assert_eq!(m.comments, 0);
    }
}
