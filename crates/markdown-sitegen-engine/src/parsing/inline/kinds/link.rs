/// Link and image syntax.
///
/// Both captures are "anything except the enclosing bracket pair", so
/// `![alt [x]](url)` silently fails to match instead of erroring.
pub struct Link;

impl Link {
    /// `[text](url)`. The "not preceded by `!`" rule is applied by the
    /// extractor since the regex crate has no lookbehind.
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^\(\)]*)\)";
}

pub struct Image;

impl Image {
    /// The marker that turns a link into an image.
    pub const BANG: char = '!';
    /// `![alt](url)`
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^\(\)]*)\)";
}
