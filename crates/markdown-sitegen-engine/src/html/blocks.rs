use crate::error::Result;
use crate::parsing::{
    blocks::{
        BlockKind,
        kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    },
    inline::InlineSpan,
};

use super::{
    convert::{span_to_html_node, text_to_children},
    node::HtmlNode,
};

/// Builds the parent node for one classified block.
pub fn block_to_html_node(block: &str, kind: BlockKind) -> Result<HtmlNode> {
    match kind {
        BlockKind::Paragraph => paragraph_to_html_node(block),
        BlockKind::Heading { level } => heading_to_html_node(block, level),
        BlockKind::Code => code_to_html_node(block),
        BlockKind::Quote => quote_to_html_node(block),
        BlockKind::UnorderedList => unordered_list_to_html_node(block),
        BlockKind::OrderedList => ordered_list_to_html_node(block),
    }
}

/// Inline content whose lines flow together (paragraphs, headings, items).
fn flowed_children(text: &str) -> Result<Vec<HtmlNode>> {
    text_to_children(&Paragraph::flow(text))
}

fn paragraph_to_html_node(block: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("p", flowed_children(block)?))
}

fn heading_to_html_node(block: &str, level: u8) -> Result<HtmlNode> {
    let children = flowed_children(Heading::content(block, level))?;
    Ok(HtmlNode::parent(format!("h{level}"), children))
}

fn code_to_html_node(block: &str) -> Result<HtmlNode> {
    // Raw zone: a single plain span, never tokenized
    let text = span_to_html_node(InlineSpan::plain(CodeFence::content(block)))?;
    let code = HtmlNode::parent("code", vec![text]);
    Ok(HtmlNode::parent("pre", vec![code]))
}

fn quote_to_html_node(block: &str) -> Result<HtmlNode> {
    let text = block
        .split('\n')
        .map(BlockQuote::strip_prefix)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(HtmlNode::parent("blockquote", text_to_children(&text)?))
}

fn unordered_list_to_html_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| list_item(UnorderedList::item_text(line)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ul", items))
}

fn ordered_list_to_html_node(block: &str) -> Result<HtmlNode> {
    let items = block
        .split('\n')
        .map(|line| list_item(OrderedList::item_text(line)))
        .collect::<Result<Vec<_>>>()?;
    Ok(HtmlNode::parent("ol", items))
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", flowed_children(text)?))
}
