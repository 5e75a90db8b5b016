use crate::constants::MAX_RECURSION_DEPTH;
use compact_str::CompactString;
use tree_sitter::{Node, Tree};

/// The lexical channel a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Executable source text.
    Code,
    /// Line or block comment content.
    Comment,
    /// String-literal content (including interpolations).
    Str,
}

/// A leaf token from the Swift grammar.
///
/// Anonymous grammar tokens (keywords, punctuation) have `kind` equal to
/// their spelling, e.g. a `var` keyword is `kind == "var"`. Named leaves
/// carry the grammar's node kind, e.g. `simple_identifier`.
#[derive(Debug, Clone)]
pub struct Token {
    /// Grammar node kind.
    pub kind: &'static str,
    /// Kind of the enclosing (parent) node.
    pub parent_kind: &'static str,
    /// Token text.
    pub text: CompactString,
    /// Byte offset of the token start.
    pub start: usize,
    /// Byte offset one past the token end.
    pub end: usize,
    /// 1-indexed line number of the token start.
    pub line: usize,
    /// 1-indexed byte column of the token start.
    pub col: usize,
    /// Lexical channel.
    pub channel: Channel,
}

impl Token {
    /// Whether this token is an identifier-like named leaf.
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        self.channel == Channel::Code && self.kind.contains("identifier")
    }

    /// Whether this token is the given keyword or punctuation spelling.
    /// Anonymous tokens have `kind == text`, which filters out backticked
    /// identifiers that merely spell a keyword.
    #[must_use]
    pub fn is_anon(&self, spelling: &str) -> bool {
        self.channel == Channel::Code && self.kind == spelling && self.text == spelling
    }

    /// Whether this token starts exactly where `prev` ends (no whitespace).
    #[must_use]
    pub fn adjacent_to(&self, prev: &Token) -> bool {
        self.start == prev.end
    }

    /// Whether the token text is purely alphabetic (keyword-shaped).
    #[must_use]
    pub fn is_word(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_alphabetic)
    }
}

/// Flattens the tree into leaf tokens and a byte-level code mask.
///
/// Bytes inside comments and string literals are masked off so textual rules
/// never fire inside them. Whitespace between tokens counts as code.
#[must_use]
pub fn lex(tree: &Tree, source: &str) -> (Vec<Token>, Vec<bool>) {
    let mut tokens = Vec::new();
    let mut code_mask = vec![true; source.len()];
    walk(tree.root_node(), source, false, "", 0, &mut tokens, &mut code_mask);
    (tokens, code_mask)
}

fn walk(
    node: Node<'_>,
    source: &str,
    in_string: bool,
    parent_kind: &'static str,
    depth: usize,
    tokens: &mut Vec<Token>,
    code_mask: &mut [bool],
) {
    let kind = node.kind();
    let in_string = in_string || kind.contains("string_literal") || kind.contains("regex_literal");

    if depth >= MAX_RECURSION_DEPTH {
        // Too deep to classify reliably; mask the whole region off so no
        // textual rule fires inside it.
        mask_range(code_mask, node.start_byte(), node.end_byte());
        return;
    }

    if node.child_count() == 0 {
        let channel = if kind.contains("comment") {
            Channel::Comment
        } else if in_string {
            Channel::Str
        } else {
            Channel::Code
        };
        let (start, end) = (node.start_byte(), node.end_byte());
        if channel != Channel::Code {
            mask_range(code_mask, start, end);
        }
        let pos = node.start_position();
        tokens.push(Token {
            kind,
            parent_kind,
            text: CompactString::from(source.get(start..end).unwrap_or("")),
            start,
            end,
            line: pos.row + 1,
            col: pos.column + 1,
            channel,
        });
        return;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        walk(child, source, in_string, kind, depth + 1, tokens, code_mask);
    }
}

fn mask_range(code_mask: &mut [bool], start: usize, end: usize) {
    let end = end.min(code_mask.len());
    for flag in code_mask.iter_mut().take(end).skip(start) {
        *flag = false;
    }
}

/// Returns the 1-indexed (line, column) of the first syntax error, if any.
#[must_use]
pub fn first_error(tree: &Tree) -> Option<(usize, usize)> {
    if !tree.root_node().has_error() {
        return None;
    }
    find_error(tree.root_node())
}

fn find_error(node: Node<'_>) -> Option<(usize, usize)> {
    if node.is_error() || node.is_missing() {
        let pos = node.start_position();
        return Some((pos.row + 1, pos.column + 1));
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_error(child) {
            return Some(found);
        }
    }
    // The error flag is set but no child carries it (e.g. zero-width errors):
    // fall back to the node's own position.
    let pos = node.start_position();
    Some((pos.row + 1, pos.column + 1))
}
