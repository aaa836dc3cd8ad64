/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block kind when no
/// other rule matches. Their lines are flowed into one inline string.
pub struct Paragraph;

impl Paragraph {
    /// Joins the block's lines with single spaces.
    pub fn flow(text: &str) -> String {
        text.replace('\n', " ")
    }
}
