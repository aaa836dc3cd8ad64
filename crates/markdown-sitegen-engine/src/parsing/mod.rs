pub mod blocks;
pub mod inline;

use crate::error::{MarkdownError, Result};
use crate::html::{HtmlNode, block_to_html_node};

use blocks::{block_to_block_kind, markdown_to_blocks};

/// Converts a whole document into a `div` wrapping one node per block.
///
/// Any error from any block aborts the conversion.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let children = markdown_to_blocks(markdown)
        .into_iter()
        .map(|block| block_to_html_node(block, block_to_block_kind(block)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("div", children))
}

/// Convenience: convert and serialize in one call.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    markdown_to_html_node(markdown)?.to_html()
}

/// Returns the text of the first level-1 heading line.
///
/// Scans raw lines, not blocks. `# Title` and `#Title` both qualify when
/// the trimmed remainder is non-empty; `##` and deeper are skipped even if
/// they come first.
///
/// # Errors
/// [`MarkdownError::NoTitle`] if no line qualifies.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find_map(title_of_line)
        .map(str::to_string)
        .ok_or(MarkdownError::NoTitle)
}

fn title_of_line(line: &str) -> Option<&str> {
    let rest = match line.strip_prefix("# ") {
        Some(rest) => rest,
        None if !line.starts_with("##") => line.strip_prefix('#')?,
        None => return None,
    };
    let title = rest.trim();
    (!title.is_empty()).then_some(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_is_empty_div() {
        assert_eq!(markdown_to_html("").unwrap(), "<div></div>");
        assert_eq!(markdown_to_html("\n\n  \n").unwrap(), "<div></div>");
    }

    #[test]
    fn one_node_per_block() {
        let node = markdown_to_html_node("# T\n\npara\n\n- item").unwrap();
        let tags: Vec<_> = node
            .children()
            .unwrap()
            .iter()
            .map(|c| c.tag().unwrap())
            .collect();
        assert_eq!(tags, vec!["h1", "p", "ul"]);
    }

    #[test]
    fn inline_error_fails_whole_document() {
        let err = markdown_to_html("# Fine\n\nbroken `code").unwrap_err();
        assert!(matches!(err, MarkdownError::UnmatchedDelimiter { .. }));
    }

    #[test]
    fn title_simple() {
        assert_eq!(extract_title("# Title\n\nBody").unwrap(), "Title");
    }

    #[test]
    fn title_is_trimmed() {
        assert_eq!(extract_title("#   Hello   \n").unwrap(), "Hello");
    }

    #[test]
    fn title_without_space() {
        assert_eq!(extract_title("#Hello").unwrap(), "Hello");
    }

    #[test]
    fn title_skips_deeper_headings() {
        assert_eq!(
            extract_title("## Sub\n\n### Deeper\n\n# Real").unwrap(),
            "Real"
        );
    }

    #[test]
    fn title_skips_empty_h1() {
        assert_eq!(extract_title("#   \n# Second").unwrap(), "Second");
    }

    #[test]
    fn title_missing() {
        assert_eq!(extract_title("## Only\n\nBody"), Err(MarkdownError::NoTitle));
        assert_eq!(extract_title(""), Err(MarkdownError::NoTitle));
    }

    #[test]
    fn title_must_start_the_line() {
        assert_eq!(
            extract_title("text # not a title"),
            Err(MarkdownError::NoTitle)
        );
    }
}
