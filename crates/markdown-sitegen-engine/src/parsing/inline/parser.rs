use crate::error::Result;

use super::{
    delimiter::{split_spans_delimiter, split_spans_image, split_spans_link},
    kinds::{CodeSpan, Emphasis},
    types::{InlineSpan, SpanKind},
};

/// Tokenizes one inline string into an ordered sequence of [`InlineSpan`]s.
///
/// # Stage Order
/// 1. images, which are a superset of link syntax
/// 2. links
/// 3. code spans, so their content is never split on emphasis markers
/// 4. bold (`**`) before either italic marker, since `*` is its prefix
/// 5. italic (`_`)
/// 6. italic (`*`)
///
/// # Errors
/// Fails atomically with [`crate::MarkdownError::UnmatchedDelimiter`] if any
/// plain run has an odd number of a delimiter.
pub fn text_to_spans(text: &str) -> Result<Vec<InlineSpan>> {
    let spans = vec![InlineSpan::plain(text)];
    let spans = split_spans_image(spans);
    let spans = split_spans_link(spans);
    let spans = split_spans_delimiter(spans, CodeSpan::TICK, SpanKind::Code)?;
    let spans = split_spans_delimiter(spans, Emphasis::BOLD, SpanKind::Bold)?;
    let spans = split_spans_delimiter(spans, Emphasis::UNDERSCORE, SpanKind::Italic)?;
    split_spans_delimiter(spans, Emphasis::STAR, SpanKind::Italic)
}
