use std::fmt;

/// The closed set of inline span kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text outside any inline construct.
    Plain,
    Bold,
    Italic,
    /// Backtick-delimited code. Never parsed further.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SpanKind::Plain => "Plain",
            SpanKind::Bold => "Bold",
            SpanKind::Italic => "Italic",
            SpanKind::Code => "Code",
            SpanKind::Link => "Link",
            SpanKind::Image => "Image",
        };
        f.write_str(name)
    }
}

/// A typed run of inline content.
///
/// `text` holds the display text (alt text for images). `url` is only set
/// for [`SpanKind::Link`] and [`SpanKind::Image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub kind: SpanKind,
    pub text: String,
    pub url: Option<String>,
}

impl InlineSpan {
    /// Creates a span without a URL.
    pub fn new(kind: SpanKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(SpanKind::Plain, text)
    }

    /// Creates a span carrying a URL (links and images).
    pub fn with_url(kind: SpanKind, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            url: Some(url.into()),
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(SpanKind::Link, text, url)
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(SpanKind::Image, alt, url)
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}
