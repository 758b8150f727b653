//! Fixture-based extraction tests (no network)

mod common;

use common::{load_fixture, INDEX_EVENTS};
use mdn_event_stubs::{
    extract_all, extract_event_types, parse_markdown, select_candidate_container, Node,
    StubError,
};
use rstest::rstest;
use tracing_test::traced_test;

#[test]
#[traced_test]
fn test_index_extracts_events_in_document_order() {
    let markdown = load_fixture("index.md");

    let events = extract_event_types(&markdown).unwrap();

    assert_eq!(events, INDEX_EVENTS);
}

#[test]
fn test_extraction_is_idempotent() {
    let document = parse_markdown(&load_fixture("index.md"));

    let first = extract_all(&document).unwrap();
    let second = extract_all(&document).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_only_the_list_of_lists_is_selected() {
    let document = parse_markdown(&load_fixture("index.md"));

    let container = select_candidate_container(&document.children).unwrap();

    // Three interfaces in the outer list
    assert_eq!(container.as_list().map(<[Node]>::len), Some(3));
}

#[rstest]
#[case::two_lists_of_lists("two_lists_of_lists.md", 2)]
#[case::no_list_of_lists("no_list_of_lists.md", 0)]
fn test_cardinality_errors(#[case] fixture: &str, #[case] expected: usize) {
    let markdown = load_fixture(fixture);

    match extract_event_types(&markdown) {
        Err(StubError::StructuralCardinality { found }) => assert_eq!(found, expected),
        other => panic!("expected a cardinality error, got {other:?}"),
    }
}

#[test]
#[traced_test]
fn test_inline_code_in_leaf_is_shape_mismatch() {
    let markdown = load_fixture("inline_code_leaf.md");

    match extract_event_types(&markdown) {
        Err(StubError::ShapeMismatch { index, found }) => {
            assert_eq!(index, 1);
            assert_eq!(found, "[Paragraph[Link[Other(code), RawText]]]");
        }
        other => panic!("expected a shape mismatch, got {other:?}"),
    }
}

#[rstest]
#[case::multi_line_item("- [Window](/w)\n  - [resize\n    event](/r)\n")]
#[case::text_after_link("- [Window](/w)\n  - [resize event](/r) (deprecated)\n")]
#[case::plain_text_item("- [Window](/w)\n  - resize event\n")]
#[case::emphasised_link_text("- [Window](/w)\n  - [*resize* event](/r)\n")]
fn test_malformed_leaves_abort_extraction(#[case] markdown: &str) {
    let result = extract_event_types(markdown);

    assert!(
        matches!(result, Err(StubError::ShapeMismatch { index: 0, .. })),
        "unexpected result: {result:?}"
    );
}

#[rstest]
#[case::underscore("foo_bar event", "foo_bar")]
#[case::ampersand("a & b event", "a & b")]
#[case::entity("a &amp; b event", "a & b")]
#[case::unmatched_asterisk("a*b event", "a*b")]
#[case::exclamation("a ! b event", "a ! b")]
#[case::backslash_escape(r"webkit\_prefixed event", "webkit_prefixed")]
fn test_punctuation_in_link_text_is_one_token(#[case] link_text: &str, #[case] expected: &str) {
    let markdown = format!("- [Window](/w)\n  - [{link_text}](/x)\n");

    assert_eq!(extract_event_types(&markdown).unwrap(), vec![expected]);
}

#[test]
fn test_punctuation_fixture_extracts_every_leaf() {
    let events = extract_event_types(&load_fixture("punctuation_leaves.md")).unwrap();

    assert_eq!(
        events,
        vec!["foo_bar", "a & b", "a & b", "a*b", "a ! b", "webkit_prefixed"]
    );
}

#[test]
fn test_nested_list_not_in_first_item_is_ignored() {
    // The outer list qualifies only through its first item
    let markdown = "\
- [Window](/w)
- [Document](/d)
  - [scroll event](/s)
";

    assert!(matches!(
        extract_event_types(markdown),
        Err(StubError::StructuralCardinality { found: 0 })
    ));
}

#[test]
fn test_multiple_nested_lists_in_one_item_are_flattened() {
    let markdown = "\
- [Window](/w)

  - [resize event](/r)

  Deprecated:

  - [unload event](/u)
";

    assert_eq!(
        extract_event_types(markdown).unwrap(),
        vec!["resize", "unload"]
    );
}

#[test]
fn test_ordered_lists_are_lists_too() {
    let markdown = "\
1. [Window](/w)
   1. [resize event](/r)
   2. [scroll](/s)
";

    assert_eq!(
        extract_event_types(markdown).unwrap(),
        vec!["resize", "scroll"]
    );
}
