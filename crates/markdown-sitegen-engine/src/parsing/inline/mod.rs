//! # Inline Parsing
//!
//! Turns one inline string (a paragraph, heading, quote, or list item body)
//! into typed spans.
//!
//! ## Architecture
//!
//! Tokenizing is a fixed pipeline of splitters over a `Vec<InlineSpan>`.
//! Every stage only touches `Plain` spans, so anything an earlier stage typed
//! is inert to later ones:
//! - Images and links are pulled out first by regex
//! - Code spans are split next and become raw zones
//! - Emphasis markers are split last, longest marker first
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` and `SpanKind`
//! - **`kinds`**: Inline-specific types with owned delimiters
//! - **`extract`**: regex matchers for images and links
//! - **`delimiter`**: splitters for symmetric delimiters and image/link matches
//! - **`parser`**: `text_to_spans()` main entry point

pub mod delimiter;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod types;

pub use extract::{extract_markdown_images, extract_markdown_links};
pub use parser::text_to_spans;
pub use types::{InlineSpan, SpanKind};
