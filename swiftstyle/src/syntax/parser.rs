use anyhow::{anyhow, Result};
use tree_sitter::{Parser, Tree};

/// Parses Swift source with the bundled `tree-sitter-swift` grammar.
///
/// # Errors
///
/// Returns an error if the grammar version is incompatible with the linked
/// `tree-sitter` runtime, or if parsing is cancelled before producing a tree.
pub fn parse(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&tree_sitter_swift::LANGUAGE.into())
        .map_err(|e| anyhow!("failed to load Swift grammar: {e}"))?;
    parser
        .parse(source, None)
        .ok_or_else(|| anyhow!("Swift parser produced no tree"))
}
