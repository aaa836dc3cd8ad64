use crate::error::{MarkdownError, Result};

use super::{
    extract::{Extracted, find_images, find_links},
    types::{InlineSpan, SpanKind},
};

/// Re-splits every plain span on a symmetric `delimiter`.
///
/// Pieces at even indices stay plain, pieces at odd indices become `kind`.
/// Empty pieces are dropped. Non-plain spans pass through untouched.
///
/// # Errors
/// [`MarkdownError::UnmatchedDelimiter`] if a plain span contains the
/// delimiter an odd number of times.
pub fn split_spans_delimiter(
    spans: Vec<InlineSpan>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<InlineSpan>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        // k pieces means k - 1 delimiters
        if pieces.len() % 2 == 0 {
            return Err(MarkdownError::UnmatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if piece.is_empty() {
                continue;
            }
            let piece_kind = if i % 2 == 0 { SpanKind::Plain } else { kind };
            out.push(InlineSpan::new(piece_kind, piece));
        }
    }

    Ok(out)
}

/// Splits plain spans around every `![alt](url)` occurrence.
pub fn split_spans_image(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_with(spans, find_images, SpanKind::Image)
}

/// Splits plain spans around every `[text](url)` occurrence.
pub fn split_spans_link(spans: Vec<InlineSpan>) -> Vec<InlineSpan> {
    split_spans_with(spans, find_links, SpanKind::Link)
}

fn split_spans_with(
    spans: Vec<InlineSpan>,
    find: fn(&str) -> Vec<Extracted>,
    kind: SpanKind,
) -> Vec<InlineSpan> {
    // Helper to emit the text between matches, skipping empty runs
    fn push_plain(out: &mut Vec<InlineSpan>, text: &str) {
        if !text.is_empty() {
            out.push(InlineSpan::plain(text));
        }
    }

    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let found = find(&span.text);
        if found.is_empty() {
            out.push(span);
            continue;
        }

        let mut text_start = 0;
        for m in found {
            push_plain(&mut out, &span.text[text_start..m.range.start]);
            text_start = m.range.end;
            out.push(InlineSpan::with_url(kind, m.text, m.url));
        }
        push_plain(&mut out, &span.text[text_start..]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_code_delimiter() {
        let spans = vec![InlineSpan::plain("This is text with a `code block` word")];
        let out = split_spans_delimiter(spans, "`", SpanKind::Code).unwrap();
        assert_eq!(
            out,
            vec![
                InlineSpan::plain("This is text with a "),
                InlineSpan::new(SpanKind::Code, "code block"),
                InlineSpan::plain(" word"),
            ]
        );
    }

    #[test]
    fn split_bold_delimiter_multiple() {
        let spans = vec![InlineSpan::plain("**one** and **two**")];
        let out = split_spans_delimiter(spans, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            out,
            vec![
                InlineSpan::new(SpanKind::Bold, "one"),
                InlineSpan::plain(" and "),
                InlineSpan::new(SpanKind::Bold, "two"),
            ]
        );
    }

    #[test]
    fn no_delimiter_keeps_span() {
        let spans = vec![InlineSpan::plain("nothing here")];
        let out = split_spans_delimiter(spans, "*", SpanKind::Italic).unwrap();
        assert_eq!(out, vec![InlineSpan::plain("nothing here")]);
    }

    #[test]
    fn unmatched_delimiter_is_an_error() {
        let spans = vec![InlineSpan::plain("a *lonely marker")];
        let err = split_spans_delimiter(spans, "*", SpanKind::Italic).unwrap_err();
        assert_eq!(
            err,
            MarkdownError::UnmatchedDelimiter {
                delimiter: "*".to_string(),
                text: "a *lonely marker".to_string(),
            }
        );
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![
            InlineSpan::new(SpanKind::Code, "a*b"),
            InlineSpan::link("x*", "https://example.com/*"),
            InlineSpan::plain("*c*"),
        ];
        let out = split_spans_delimiter(spans, "*", SpanKind::Italic).unwrap();
        assert_eq!(
            out,
            vec![
                InlineSpan::new(SpanKind::Code, "a*b"),
                InlineSpan::link("x*", "https://example.com/*"),
                InlineSpan::new(SpanKind::Italic, "c"),
            ]
        );
    }

    #[test]
    fn empty_pieces_are_dropped() {
        let spans = vec![InlineSpan::plain("``")];
        let out = split_spans_delimiter(spans, "`", SpanKind::Code).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn split_images_in_place() {
        let spans = vec![InlineSpan::plain(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        )];
        assert_eq!(
            split_spans_image(spans),
            vec![
                InlineSpan::plain("This is text with an "),
                InlineSpan::image("image", "https://i.imgur.com/zjjcJKZ.png"),
                InlineSpan::plain(" and another "),
                InlineSpan::image("second image", "https://i.imgur.com/3elNhQu.png"),
            ]
        );
    }

    #[test]
    fn split_links_in_place() {
        let spans = vec![
            InlineSpan::new(SpanKind::Bold, "[not](split)"),
            InlineSpan::plain("[to boot dev](https://www.boot.dev) trailing"),
        ];
        assert_eq!(
            split_spans_link(spans),
            vec![
                InlineSpan::new(SpanKind::Bold, "[not](split)"),
                InlineSpan::link("to boot dev", "https://www.boot.dev"),
                InlineSpan::plain(" trailing"),
            ]
        );
    }

    #[test]
    fn split_links_leaves_image_syntax_alone() {
        let spans = vec![InlineSpan::plain("![alt](u1)")];
        assert_eq!(
            split_spans_link(spans),
            vec![InlineSpan::plain("![alt](u1)")]
        );
    }
}
