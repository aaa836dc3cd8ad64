use crate::parsing::inline::SpanKind;

/// Why a parent node could not be serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("Parent nodes must have a tag")]
    MissingTag,
    #[error("Parent nodes must have children")]
    MissingChildren,
}

/// Errors raised while converting markdown to HTML.
///
/// Every variant is fatal to the conversion call that produced it; no
/// partial output is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkdownError {
    /// An inline delimiter appears an odd number of times in a plain run.
    #[error("Unmatched delimiter '{delimiter}' in text: {text}")]
    UnmatchedDelimiter { delimiter: String, text: String },

    /// A link or image span reached HTML conversion without a URL.
    #[error("{kind} span must have a URL")]
    MissingUrl { kind: SpanKind },

    #[error("All leaf nodes must have a value")]
    MissingValue,

    #[error(transparent)]
    Structural(#[from] StructuralError),

    #[error("No h1 header found in markdown content")]
    NoTitle,
}

pub type Result<T> = std::result::Result<T, MarkdownError>;
