/// The kind of a block, as decided by [`super::block_to_block_kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other rule matches.
    Paragraph,
    /// A single-line ATX heading.
    Heading {
        /// 1 to 6
        level: u8,
    },
    /// A block wrapped in ``` fences.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps.
    OrderedList,
}
