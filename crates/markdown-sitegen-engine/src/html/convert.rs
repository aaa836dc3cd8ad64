use crate::error::{MarkdownError, Result};
use crate::parsing::inline::{InlineSpan, SpanKind, text_to_spans};

use super::node::HtmlNode;

/// Maps one inline span to exactly one leaf node.
///
/// # Errors
/// [`MarkdownError::MissingUrl`] if a link or image has no URL or an empty one.
pub fn span_to_html_node(span: InlineSpan) -> Result<HtmlNode> {
    let InlineSpan { kind, text, url } = span;
    let node = match kind {
        SpanKind::Plain => HtmlNode::text(text),
        SpanKind::Bold => HtmlNode::leaf("b", text),
        SpanKind::Italic => HtmlNode::leaf("i", text),
        SpanKind::Code => HtmlNode::leaf("code", text),
        SpanKind::Link => HtmlNode::leaf("a", text).with_attribute("href", require_url(kind, url)?),
        SpanKind::Image => HtmlNode::leaf("img", "")
            .with_attribute("src", require_url(kind, url)?)
            .with_attribute("alt", text),
    };
    Ok(node)
}

fn require_url(kind: SpanKind, url: Option<String>) -> Result<String> {
    url.filter(|u| !u.is_empty())
        .ok_or(MarkdownError::MissingUrl { kind })
}

/// Tokenizes `text` and converts every span, preserving order.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>> {
    text_to_spans(text)?
        .into_iter()
        .map(span_to_html_node)
        .collect()
}
