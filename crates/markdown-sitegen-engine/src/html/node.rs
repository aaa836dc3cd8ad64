use crate::error::{MarkdownError, Result, StructuralError};

/// Ordered attribute list. Insertion order is serialization order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Renders `name="value"` pairs separated by single spaces.
    ///
    /// Values are written as-is; escaping is the caller's concern.
    pub fn props_to_html(&self) -> String {
        self.iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// An HTML tree node.
///
/// Fields are optional so that malformed nodes can be represented and are
/// rejected at serialization time rather than at construction time. The
/// constructors always produce well-formed nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// A childless node. Without a tag it serializes to its raw value.
    Leaf {
        tag: Option<String>,
        value: Option<String>,
        attributes: Attributes,
    },
    /// A tagged node wrapping an ordered list of owned children.
    Parent {
        tag: Option<String>,
        /// `None` is "no sequence", distinct from an empty sequence.
        children: Option<Vec<HtmlNode>>,
        attributes: Attributes,
    },
}

impl HtmlNode {
    /// Untagged leaf: serializes to `value` verbatim.
    pub fn text(value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        HtmlNode::Leaf {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Parent {
            tag: Some(tag.into()),
            children: Some(children),
            attributes: Attributes::new(),
        }
    }

    /// Appends an attribute, keeping insertion order.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => {
                attributes.push(name, value);
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            HtmlNode::Leaf { tag, .. } | HtmlNode::Parent { tag, .. } => tag.as_deref(),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            HtmlNode::Leaf { attributes, .. } | HtmlNode::Parent { attributes, .. } => attributes,
        }
    }

    /// Returns the children of a parent node, or `None` for leaves.
    pub fn children(&self) -> Option<&[HtmlNode]> {
        match self {
            HtmlNode::Leaf { .. } => None,
            HtmlNode::Parent { children, .. } => children.as_deref(),
        }
    }

    /// Serializes the node and its subtree.
    ///
    /// # Errors
    /// - [`MarkdownError::MissingValue`] for a leaf without a value
    /// - [`StructuralError::MissingTag`] for a parent without a tag
    /// - [`StructuralError::MissingChildren`] for a parent without children
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        match self {
            HtmlNode::Leaf {
                tag,
                value,
                attributes,
            } => {
                let value = value.as_deref().ok_or(MarkdownError::MissingValue)?;
                match tag {
                    None => out.push_str(value),
                    Some(tag) => {
                        write_open_tag(out, tag, attributes);
                        out.push_str(value);
                        write_close_tag(out, tag);
                    }
                }
            }
            HtmlNode::Parent {
                tag,
                children,
                attributes,
            } => {
                let tag = tag.as_deref().ok_or(StructuralError::MissingTag)?;
                let children = children.as_ref().ok_or(StructuralError::MissingChildren)?;
                write_open_tag(out, tag, attributes);
                for child in children {
                    child.write_html(out)?;
                }
                write_close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn write_open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    if !attributes.is_empty() {
        out.push(' ');
        out.push_str(&attributes.props_to_html());
    }
    out.push('>');
}

fn write_close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
