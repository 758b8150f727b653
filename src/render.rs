//! Python stub rendering for extracted event names
//!
//! The output is a `.pyi` module declaring a single `Literal` type alias:
//!
//! ```text
//! # This file is generated by build-stubs from <source>. Do not edit.
//! from typing import Literal
//!
//! EventType = Literal[
//!     "resize",
//!     "scroll",
//! ]
//! ```

use std::collections::HashSet;

use crate::config::DEFAULT_SOURCE_URL;
use crate::error::{Result, StubError};

/// Configuration options for stub rendering
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Name of the generated type alias
    pub alias_name: String,
    /// Source mentioned in the generated header comment; defaults to the
    /// MDN URL
    pub source: Option<String>,
    /// Keep only the first occurrence of each event name
    pub dedupe: bool,
    /// Indentation of each literal member
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            alias_name: "EventType".to_string(),
            source: None,
            dedupe: false,
            indent: "    ".to_string(),
        }
    }
}

/// Renders event names into the `event_types.pyi` stub
pub struct StubRenderer {
    config: RenderConfig,
}

impl StubRenderer {
    /// Create a renderer with default configuration
    pub fn new() -> Self {
        Self {
            config: RenderConfig::default(),
        }
    }

    /// Create a renderer with custom configuration
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render the stub module text
    ///
    /// # Errors
    ///
    /// * `StubError::InvalidConfig` - If the alias name is not a Python identifier
    pub fn render(&self, events: &[String]) -> Result<String> {
        if !is_python_identifier(&self.config.alias_name) {
            return Err(StubError::InvalidConfig(format!(
                "type alias name {:?} is not a valid Python identifier",
                self.config.alias_name
            )));
        }

        let mut lines = Vec::new();
        lines.push(format!(
            "# This file is generated by build-stubs from {}. Do not edit.",
            self.config.source.as_deref().unwrap_or(DEFAULT_SOURCE_URL)
        ));

        let members = self.members(events);
        if members.is_empty() {
            // `Literal[]` is not valid Python
            lines.push(String::new());
            lines.push(format!("{} = str", self.config.alias_name));
        } else {
            lines.push("from typing import Literal".to_string());
            lines.push(String::new());
            lines.push(format!("{} = Literal[", self.config.alias_name));
            for event in members {
                lines.push(format!("{}{},", self.config.indent, python_string(event)));
            }
            lines.push("]".to_string());
        }

        let mut output = lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    fn members<'a>(&self, events: &'a [String]) -> Vec<&'a str> {
        if !self.config.dedupe {
            return events.iter().map(String::as_str).collect();
        }

        let mut seen = HashSet::new();
        events
            .iter()
            .map(String::as_str)
            .filter(|event| seen.insert(*event))
            .collect()
    }
}

impl Default for StubRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote a string as a double-quoted Python literal
fn python_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str(r"\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str(r"\n"),
            '\r' => quoted.push_str(r"\r"),
            '\t' => quoted.push_str(r"\t"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}
