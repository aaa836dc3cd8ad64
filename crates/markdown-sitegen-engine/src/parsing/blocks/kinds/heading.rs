/// ATX heading block type.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `line` opens with 1 to 6 `#` followed by
    /// a single space.
    pub fn level(line: &str) -> Option<u8> {
        let hashes = line.chars().take_while(|&c| c == Self::MARKER).count();
        if !(1..=Self::MAX_LEVEL).contains(&hashes) {
            return None;
        }
        // `#` is one byte, so `hashes` is also a byte offset
        if !line[hashes..].starts_with(' ') {
            return None;
        }
        u8::try_from(hashes).ok()
    }

    /// Strips the `#` run and the one space after it.
    pub fn content(line: &str, level: u8) -> &str {
        line.get(usize::from(level) + 1..).unwrap_or("")
    }
}
