/// Code span inline type with owned delimiter constant.
///
/// Code spans are split out before any emphasis marker, so the text between
/// backticks is never parsed for bold or italic.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that delimits code spans.
    pub const TICK: &'static str = "`";
}
