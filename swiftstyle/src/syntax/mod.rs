//! Swift source front end.
//!
//! Parsing is delegated to the reusable `tree-sitter-swift` grammar. The rule
//! engine never consumes the concrete tree directly: it sees a flat stream of
//! leaf tokens tagged with a channel (code, comment, or string) plus a
//! byte-level code mask for the purely textual rules. This keeps every rule a
//! local pattern match with no semantic analysis.

mod parser;
mod tokens;

pub use parser::parse;
pub use tokens::{Channel, Token};

use crate::utils::LineIndex;
use anyhow::Result;

/// A parsed Swift source file, ready for rule checks.
pub struct SwiftFile<'a> {
    /// The raw source text.
    pub source: &'a str,
    /// Source split into lines (without terminators).
    pub lines: Vec<&'a str>,
    /// Leaf tokens in source order.
    pub tokens: Vec<Token>,
    /// Per-byte mask: `true` where the byte belongs to code (not a string
    /// literal or comment).
    pub code_mask: Vec<bool>,
    /// Byte-offset to line mapping.
    pub line_index: LineIndex,
    /// Location of the first syntax error, if the grammar could not fully
    /// parse the file. Rules still run: tree-sitter is error-tolerant.
    pub syntax_error: Option<(usize, usize)>,
}

impl<'a> SwiftFile<'a> {
    /// Parses Swift source into a token stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the Swift grammar cannot be loaded or the parser
    /// produces no tree at all (both indicate a broken installation, not bad
    /// input: syntax errors in the input are reported via `syntax_error`).
    pub fn parse(source: &'a str) -> Result<Self> {
        let tree = parser::parse(source)?;
        let (tokens, code_mask) = tokens::lex(&tree, source);
        let syntax_error = tokens::first_error(&tree);
        Ok(Self {
            source,
            lines: source.lines().collect(),
            tokens,
            code_mask,
            line_index: LineIndex::new(source),
            syntax_error,
        })
    }

    /// Returns the tokens on the code channel, in source order.
    #[must_use]
    pub fn code_tokens(&self) -> Vec<&Token> {
        self.tokens
            .iter()
            .filter(|t| t.channel == Channel::Code)
            .collect()
    }

    /// Whether the byte at `offset` belongs to code (not string/comment).
    /// Bytes not covered by any token (whitespace) count as code.
    #[must_use]
    pub fn is_code_byte(&self, offset: usize) -> bool {
        self.code_mask.get(offset).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_surface_as_leaf_tokens() {
        let file = SwiftFile::parse("let count = 1\n").unwrap();
        let code = file.code_tokens();
        assert!(code.iter().any(|t| t.kind == "let"));
        assert!(code.iter().any(|t| t.text == "count"));
        assert!(file.syntax_error.is_none());
    }

    #[test]
    fn test_comment_and_string_channels() {
        let file = SwiftFile::parse("// a comment\nlet s = \"hello\"\n").unwrap();
        assert!(file
            .tokens
            .iter()
            .any(|t| t.channel == Channel::Comment && t.text.contains("a comment")));
        assert!(file
            .tokens
            .iter()
            .any(|t| t.channel == Channel::Str && t.text.contains("hello")));
        // The string interior must be masked out of the code mask.
        let idx = file.source.find("hello").unwrap();
        assert!(!file.is_code_byte(idx));
        assert!(file.is_code_byte(file.source.find("let").unwrap()));
    }

    #[test]
    fn test_syntax_error_is_reported_but_tokens_survive() {
        let file = SwiftFile::parse("func broken( {\n").unwrap();
        assert!(file.syntax_error.is_some());
        assert!(!file.tokens.is_empty());
    }
}
