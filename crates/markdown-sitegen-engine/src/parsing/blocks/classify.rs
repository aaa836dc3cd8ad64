use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block into exactly one [`BlockKind`].
///
/// Rules are checked in precedence order and the first match wins:
/// heading, code, quote, unordered list, ordered list, paragraph. Line
/// prefix rules require every line to conform; a block mixing prefixed and
/// plain lines is a paragraph.
pub fn block_to_block_kind(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if let [line] = lines.as_slice()
        && let Some(level) = Heading::level(line)
    {
        return BlockKind::Heading { level };
    }

    if CodeFence::is_fenced(block) {
        return BlockKind::Code;
    }

    if lines.iter().all(|line| BlockQuote::is_quoted(line)) {
        return BlockKind::Quote;
    }

    if lines.iter().all(|line| UnorderedList::is_item(line)) {
        return BlockKind::UnorderedList;
    }

    if OrderedList::is_sequence(lines.iter().copied()) {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}
