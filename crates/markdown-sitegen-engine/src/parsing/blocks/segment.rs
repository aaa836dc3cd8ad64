/// Blank line between blocks. Longer runs of newlines leave empty pieces
/// behind, which are dropped.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty blocks.
///
/// Single newlines inside a block are kept verbatim.
pub fn markdown_to_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}
