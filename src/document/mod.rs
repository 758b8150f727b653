//! Typed document tree
//!
//! The tree is the boundary between markup parsing and extraction. Only the
//! node kinds the extractor inspects get their own variant; everything else
//! the parser produces becomes [`Node::Other`] with its markup kind name kept
//! for diagnostics.
//!
//! # Module Organization
//!
//! - `markdown` - CommonMark source to [`Document`] via comrak

pub mod markdown;

use std::fmt;

pub use markdown::parse_markdown;

/// A parsed document: the ordered top-level block nodes
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }
}

/// A block or inline node of the document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Bulleted or ordered list; children are normally list items
    List(Vec<Node>),
    /// Single list item
    ListItem(Vec<Node>),
    Paragraph(Vec<Node>),
    /// Hyperlink with its destination and link text
    Link { url: String, children: Vec<Node> },
    /// Literal text run
    RawText(String),
    /// Any other markup construct, identified by kind name
    Other { kind: String, children: Vec<Node> },
}

/// Field-less tag of a [`Node`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    List,
    ListItem,
    Paragraph,
    Link,
    RawText,
    Other,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::List => "List",
            NodeKind::ListItem => "ListItem",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::Link => "Link",
            NodeKind::RawText => "RawText",
            NodeKind::Other => "Other",
        };
        f.write_str(name)
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::List(_) => NodeKind::List,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Link { .. } => NodeKind::Link,
            Node::RawText(_) => NodeKind::RawText,
            Node::Other { .. } => NodeKind::Other,
        }
    }

    /// Child nodes in document order; empty for text
    pub fn children(&self) -> &[Node] {
        match self {
            Node::List(children)
            | Node::ListItem(children)
            | Node::Paragraph(children)
            | Node::Link { children, .. }
            | Node::Other { children, .. } => children,
            Node::RawText(_) => &[],
        }
    }

    /// Items of a list node
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Children of a list item node
    pub fn as_list_item(&self) -> Option<&[Node]> {
        match self {
            Node::ListItem(children) => Some(children),
            _ => None,
        }
    }

    /// Inline children of a paragraph node
    pub fn as_paragraph(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph(children) => Some(children),
            _ => None,
        }
    }

    /// Link text nodes of a link node
    pub fn as_link(&self) -> Option<&[Node]> {
        match self {
            Node::Link { children, .. } => Some(children),
            _ => None,
        }
    }

    pub fn as_raw_text(&self) -> Option<&str> {
        match self {
            Node::RawText(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Short diagnostic label: the kind, or the markup kind name for `Other`
    pub fn label(&self) -> String {
        match self {
            Node::Other { kind, .. } => format!("Other({kind})"),
            node => node.kind().to_string(),
        }
    }
}

/// Render a node sequence as a compact kind outline, e.g.
/// `[Paragraph[Link[RawText, Other(code)]]]`.
pub fn outline(nodes: &[Node]) -> String {
    let parts: Vec<String> = nodes
        .iter()
        .map(|node| {
            let children = node.children();
            if children.is_empty() {
                node.label()
            } else {
                format!("{}{}", node.label(), outline(children))
            }
        })
        .collect();
    format!("[{}]", parts.join(", "))
}
