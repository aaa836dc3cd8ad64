//! # Block Parsing
//!
//! Two-phase block handling over whole-document text.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification** (`classify`): each block string is assigned one
//!    `BlockKind` by line-pattern rules
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind`
//! - **`kinds`**: Block-specific types with owned delimiters (BlockQuote, CodeFence,
//!   Heading, lists, Paragraph)
//! - **`segment`**: `markdown_to_blocks`
//! - **`classify`**: `block_to_block_kind`
//!
//! ## Key Invariants
//!
//! - Blocks are never empty and carry no leading or trailing whitespace
//! - Line-prefix kinds (quote, lists) require every line to conform
//! - Fenced code is a raw zone: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use classify::block_to_block_kind;
pub use segment::markdown_to_blocks;
pub use types::BlockKind;
