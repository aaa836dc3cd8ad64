/// Fenced code block type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Returns true if the block opens and closes with a fence.
    ///
    /// The length guard keeps a lone fence (whose opener and closer would
    /// overlap) from counting as a code block.
    pub fn is_fenced(block: &str) -> bool {
        block.starts_with(Self::BACKTICKS)
            && block.ends_with(Self::BACKTICKS)
            && block.len() > 2 * Self::BACKTICKS.len()
    }

    /// Returns the code between the fences.
    ///
    /// Exactly one leading newline (the one ending the opening fence line) is
    /// dropped; all other whitespace is kept verbatim.
    pub fn content(block: &str) -> &str {
        let inner = block
            .strip_prefix(Self::BACKTICKS)
            .and_then(|rest| rest.strip_suffix(Self::BACKTICKS))
            .unwrap_or(block);
        inner.strip_prefix('\n').unwrap_or(inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_fenced("```\nlet x = 1;\n```"));
    }

    #[test]
    fn lone_fence_is_not_code() {
        assert!(!CodeFence::is_fenced("```"));
        assert!(!CodeFence::is_fenced("``````"));
    }

    #[test]
    fn shortest_code_block() {
        assert!(CodeFence::is_fenced("```x```"));
        assert_eq!(CodeFence::content("```x```"), "x");
    }

    #[test]
    fn unclosed_fence() {
        assert!(!CodeFence::is_fenced("```\nprint('Hello')"));
    }

    #[test]
    fn content_drops_one_leading_newline() {
        assert_eq!(CodeFence::content("```\n\nfirst\n```"), "\nfirst\n");
    }

    #[test]
    fn content_keeps_info_string() {
        assert_eq!(
            CodeFence::content("```python\nprint(1)\n```"),
            "python\nprint(1)\n"
        );
    }
}
