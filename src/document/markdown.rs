//! Markdown parsing (CommonMark → document tree)
//!
//! Pipeline: Markdown string → Comrak AST → [`Document`]

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};
use tracing::{debug, instrument};

use super::{Document, Node};

/// Parse CommonMark source into a document tree.
///
/// YAML front matter delimited by `---` is recognised so that it does not
/// turn into a thematic break followed by a setext heading.
#[instrument(skip(source), fields(bytes = source.len()))]
pub fn parse_markdown(source: &str) -> Document {
    let arena = Arena::new();
    let options = default_comrak_options();
    let root = parse_document(&arena, source, &options);

    let children = convert_children(root);
    debug!(top_level_nodes = children.len(), "Parsed markdown document");
    Document::new(children)
}

fn default_comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.front_matter_delimiter = Some("---".to_string());
    options
}

/// Convert the children of `node`, joining adjacent text runs.
///
/// Comrak splits text at every delimiter or entity it could not match
/// (`foo_bar` is three `Text` nodes), so one run of plain text is rebuilt here
/// as a single [`Node::RawText`].
fn convert_children<'a>(node: &'a AstNode<'a>) -> Vec<Node> {
    let mut children: Vec<Node> = Vec::new();
    for child in node.children() {
        let converted = convert_node(child);
        if let (Some(Node::RawText(previous)), Node::RawText(text)) =
            (children.last_mut(), &converted)
        {
            previous.push_str(text);
            continue;
        }
        children.push(converted);
    }
    children
}

fn convert_node<'a>(node: &'a AstNode<'a>) -> Node {
    let children = || convert_children(node);
    let data = node.data.borrow();

    match &data.value {
        NodeValue::List(_) => Node::List(children()),
        NodeValue::Item(_) => Node::ListItem(children()),
        NodeValue::Paragraph => Node::Paragraph(children()),
        NodeValue::Link(link) => Node::Link {
            url: link.url.clone(),
            children: children(),
        },
        NodeValue::Text(text) => Node::RawText(text.clone()),
        other => Node::Other {
            kind: kind_name(other).to_string(),
            children: children(),
        },
    }
}

fn kind_name(value: &NodeValue) -> &'static str {
    match value {
        NodeValue::Document => "document",
        NodeValue::FrontMatter(_) => "front_matter",
        NodeValue::BlockQuote => "block_quote",
        NodeValue::CodeBlock(_) => "code_block",
        NodeValue::HtmlBlock(_) => "html_block",
        NodeValue::Heading(_) => "heading",
        NodeValue::ThematicBreak => "thematic_break",
        NodeValue::Table(_) => "table",
        NodeValue::Code(_) => "code",
        NodeValue::HtmlInline(_) => "html_inline",
        NodeValue::Emph => "emph",
        NodeValue::Strong => "strong",
        NodeValue::Strikethrough => "strikethrough",
        NodeValue::Image(_) => "image",
        NodeValue::SoftBreak => "softbreak",
        NodeValue::LineBreak => "linebreak",
        _ => "other",
    }
}
