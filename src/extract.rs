//! Event name extraction from the MDN event reference
//!
//! The event index is encoded as the only "list of lists" in the document: the
//! outer list enumerates interfaces, and each interface item nests a list of
//! links to its events. Every nested item must be a paragraph holding a single
//! text link such as `[click event](...)`.
//!
//! Extraction is all-or-nothing. Any structural surprise aborts the whole run
//! rather than producing a partial set of names.

use tracing::{debug, instrument};

use crate::document::{self, outline, Document, Node};
use crate::error::{Result, StubError};

/// Suffix carried by MDN event link titles, e.g. `"click event"`
pub const EVENT_SUFFIX: &str = " event";

/// Whether `node` is a list whose first item nests at least one list.
///
/// Only the first item is inspected. A list whose first child is not a list
/// item means the document does not look like anything this extractor
/// understands, so that case is an error rather than `false`.
pub fn is_candidate_container(node: &Node) -> Result<bool> {
    let Some(items) = node.as_list() else {
        return Ok(false);
    };

    let first = items.first();
    let first_item = first
        .and_then(Node::as_list_item)
        .ok_or_else(|| StubError::malformed_list(first.map(Node::kind)))?;

    Ok(first_item.iter().any(Node::is_list))
}

/// Text of a leaf item shaped `[Paragraph[Link[RawText]]]`, or `None`.
pub fn leaf_text(children: &[Node]) -> Option<&str> {
    let [paragraph] = children else {
        debug!("Leaf: expected 1 element, found {}", children.len());
        return None;
    };
    let Some(inlines) = paragraph.as_paragraph() else {
        debug!("Leaf: element {} is not a Paragraph", paragraph.label());
        return None;
    };
    let [link] = inlines else {
        debug!("Leaf: Paragraph has {} children, expected 1", inlines.len());
        return None;
    };
    let Some(link_text) = link.as_link() else {
        debug!("Leaf: Paragraph child {} is not a Link", link.label());
        return None;
    };
    let [text] = link_text else {
        debug!("Leaf: Link has {} children, expected 1", link_text.len());
        return None;
    };
    let raw = text.as_raw_text();
    if raw.is_none() {
        debug!("Leaf: Link child {} is not RawText", text.label());
    }
    raw
}

/// Whether the children of a list item are exactly one paragraph containing
/// exactly one link containing exactly one text node.
pub fn is_leaf_shape(children: &[Node]) -> bool {
    leaf_text(children).is_some()
}

/// Pick the single list of lists among the top-level nodes.
pub fn select_candidate_container(top_level_nodes: &[Node]) -> Result<&Node> {
    let mut candidates = Vec::new();
    for node in top_level_nodes {
        if is_candidate_container(node)? {
            candidates.push(node);
        }
    }

    match candidates.as_slice() {
        [container] => Ok(*container),
        _ => Err(StubError::StructuralCardinality {
            found: candidates.len(),
        }),
    }
}

/// Children of every second-level list item, in document order.
pub fn flatten_nested_lists(container: &Node) -> Vec<&[Node]> {
    container
        .children()
        .iter()
        .filter_map(Node::as_list_item)
        .flat_map(|item| item.iter().filter_map(Node::as_list))
        .flat_map(|nested| nested.iter().filter_map(Node::as_list_item))
        .collect()
}

/// Strip a single trailing [`EVENT_SUFFIX`], if present.
pub fn normalize_event_name(raw: &str) -> &str {
    raw.strip_suffix(EVENT_SUFFIX).unwrap_or(raw)
}

/// Extract the event name from one leaf item.
///
/// `index` is the position of the leaf in the flattened sequence and is only
/// used to name the offending item on failure.
pub fn extract_token(index: usize, leaf_children: &[Node]) -> Result<String> {
    let raw = leaf_text(leaf_children).ok_or_else(|| StubError::ShapeMismatch {
        index,
        found: outline(leaf_children),
    })?;
    Ok(normalize_event_name(raw).to_string())
}

/// Extract every event name from a parsed event reference, in document order.
#[instrument(skip(document), fields(top_level_nodes = document.children.len()))]
pub fn extract_all(document: &Document) -> Result<Vec<String>> {
    let container = select_candidate_container(&document.children)?;
    let leaves = flatten_nested_lists(container);
    debug!(leaves = leaves.len(), "Flattened nested lists");

    leaves
        .into_iter()
        .enumerate()
        .map(|(index, children)| extract_token(index, children))
        .collect()
}

/// Parse markdown source and extract its event names.
pub fn extract_event_types(markdown: &str) -> Result<Vec<String>> {
    let document = document::parse_markdown(markdown);
    extract_all(&document)
}
