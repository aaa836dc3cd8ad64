pub mod error;
pub mod html;
pub mod io;
pub mod parsing;

// Re-export key types for easier usage
pub use error::{MarkdownError, Result, StructuralError};
pub use html::{Attributes, HtmlNode};
pub use io::IoError;
pub use parsing::{
    blocks::BlockKind,
    extract_title,
    inline::{InlineSpan, SpanKind},
    markdown_to_html, markdown_to_html_node,
};
