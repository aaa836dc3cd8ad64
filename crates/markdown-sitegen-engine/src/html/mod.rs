//! # HTML Tree
//!
//! The output side of the pipeline.
//!
//! - **`node`**: `HtmlNode` (leaf or parent) and its fallible serializer
//! - **`convert`**: one inline span to one leaf node
//! - **`blocks`**: one classified block to one parent node

pub mod blocks;
pub mod convert;
pub mod node;

pub use blocks::block_to_html_node;
pub use convert::{span_to_html_node, text_to_children};
pub use node::{Attributes, HtmlNode};
