/// Unordered list block type (`- item`).
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn is_item(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Returns the item text after the marker, trimmed.
    pub fn item_text(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line).trim()
    }
}

/// Ordered list block type (`1. item`).
pub struct OrderedList;

impl OrderedList {
    /// Separates the item number from the item text.
    pub const SEPARATOR: &'static str = ". ";

    /// The exact prefix line `index` (0-based) must carry.
    pub fn marker(index: usize) -> String {
        format!("{}{}", index + 1, Self::SEPARATOR)
    }

    /// Returns true if every line carries `1. `, `2. `, ... in order.
    pub fn is_sequence<'a>(lines: impl IntoIterator<Item = &'a str>) -> bool {
        lines
            .into_iter()
            .enumerate()
            .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    /// Returns the text after the first `. `, trimmed.
    pub fn item_text(line: &str) -> &str {
        match line.find(Self::SEPARATOR) {
            Some(idx) => line[idx + Self::SEPARATOR.len()..].trim(),
            None => line.trim(),
        }
    }
}
