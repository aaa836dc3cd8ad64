use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::kinds::{Image, Link};

/// One image or link occurrence found in a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Byte range of the whole construct, brackets included.
    pub range: Range<usize>,
    /// Alt text (images) or anchor text (links).
    pub text: String,
    pub url: String,
}

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

fn to_extracted(caps: &Captures<'_>) -> Option<Extracted> {
    let whole = caps.get(0)?;
    Some(Extracted {
        range: whole.range(),
        text: caps.get(1)?.as_str().to_string(),
        url: caps.get(2)?.as_str().to_string(),
    })
}

/// Finds every `![alt](url)` in `text`, left to right, non-overlapping.
pub fn find_images(text: &str) -> Vec<Extracted> {
    image_regex()
        .captures_iter(text)
        .filter_map(|caps| to_extracted(&caps))
        .collect()
}

/// Finds every `[text](url)` in `text` that is not part of an image.
///
/// A candidate directly preceded by `!` is rejected and the search resumes
/// one byte after its opening bracket, which is what a `(?<!!)` lookbehind
/// would do.
pub fn find_links(text: &str) -> Vec<Extracted> {
    let re = link_regex();
    let mut out = vec![];
    let mut start = 0;

    while start < text.len() {
        let Some(found) = re
            .captures_at(text, start)
            .and_then(|caps| to_extracted(&caps))
        else {
            break;
        };

        if text[..found.range.start].ends_with(Image::BANG) {
            // `[` is a single byte
            start = found.range.start + 1;
            continue;
        }

        start = found.range.end;
        out.push(found);
    }

    out
}

/// Returns `(alt_text, url)` for every image in `text`.
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    find_images(text)
        .into_iter()
        .map(|e| (e.text, e.url))
        .collect()
}

/// Returns `(anchor_text, url)` for every link in `text`, images excluded.
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    find_links(text)
        .into_iter()
        .map(|e| (e.text, e.url))
        .collect()
}
