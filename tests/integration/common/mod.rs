//! Common test utilities for event reference fixtures

use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the markdown fixtures
pub fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/test_data/event_reference")
}

/// Read a markdown fixture or panic with a descriptive message
pub fn load_fixture(name: &str) -> String {
    let path = fixture_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to read fixture: {:?}", path))
}

/// Events of `index.md`, in document order
#[allow(dead_code)]
pub const INDEX_EVENTS: [&str; 9] = [
    "cancel",
    "finish",
    "remove",
    "click",
    "focus",
    "scroll",
    "resize",
    "scroll",
    "DOMContentLoaded",
];
