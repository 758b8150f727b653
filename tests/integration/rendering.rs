//! Stub rendering tests

mod common;

use common::load_fixture;
use mdn_event_stubs::{
    extract_event_types, RenderConfig, StubError, StubRenderer, DEFAULT_SOURCE_URL,
};

fn events(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_render_scenario() {
    let renderer = StubRenderer::new();

    let stub = renderer.render(&events(&["resize", "scroll"])).unwrap();

    let expected = format!(
        "# This file is generated by build-stubs from {DEFAULT_SOURCE_URL}. Do not edit.\n\
         from typing import Literal\n\
         \n\
         EventType = Literal[\n    \"resize\",\n    \"scroll\",\n]\n"
    );
    assert_eq!(stub, expected);
}

#[test]
fn test_render_index_fixture_with_dedupe() {
    let extracted = extract_event_types(&load_fixture("index.md")).unwrap();
    let renderer = StubRenderer::with_config(RenderConfig {
        alias_name: "DomEvent".to_string(),
        source: Some("tests/index.md".to_string()),
        dedupe: true,
        ..RenderConfig::default()
    });

    let stub = renderer.render(&extracted).unwrap();

    assert!(stub.starts_with("# This file is generated by build-stubs from tests/index.md."));
    assert!(stub.contains("DomEvent = Literal[\n"));
    assert_eq!(stub.matches("\"scroll\"").count(), 1);
    assert!(stub.ends_with("    \"DOMContentLoaded\",\n]\n"));
}

#[test]
fn test_render_keeps_duplicates_by_default() {
    let extracted = extract_event_types(&load_fixture("index.md")).unwrap();

    let stub = StubRenderer::new().render(&extracted).unwrap();

    assert_eq!(stub.matches("\"scroll\"").count(), 2);
}

#[test]
fn test_render_empty_sequence_falls_back_to_str() {
    let stub = StubRenderer::new().render(&[]).unwrap();

    assert!(stub.ends_with("\n\nEventType = str\n"));
    assert!(!stub.contains("Literal"));
}

#[test]
fn test_render_escapes_quotes() {
    let stub = StubRenderer::new()
        .render(&events(&[r#"say "hi""#]))
        .unwrap();

    assert!(stub.contains(r#"    "say \"hi\"","#));
}

#[test]
fn test_render_rejects_invalid_alias() {
    let renderer = StubRenderer::with_config(RenderConfig {
        alias_name: "event-type".to_string(),
        ..RenderConfig::default()
    });

    assert!(matches!(
        renderer.render(&events(&["click"])),
        Err(StubError::InvalidConfig(_))
    ));
}
