//! # MDN Event Stubs
//!
//! Generates the `event_types.pyi` type stub for pyscript from the MDN
//! "Event reference" page.
//!
//! The page lists DOM events as the only "list of lists" in its markdown
//! source: interfaces in the outer list, links such as `[click event](...)`
//! in the nested lists. This crate fetches that source, parses it into a
//! typed document tree, extracts the event names in document order and
//! renders them as a `Literal` type alias.
//!
//! ## Features
//!
//! - **Strict extraction**: any structural surprise in the page aborts the run
//! - **Typed tree**: a closed [`Node`] enum with typed accessors
//! - **Retrying fetch**: transient HTTP failures are retried with backoff
//!
//! ## Quick Start
//!
//! ### Extracting from markdown
//!
//! ```
//! use mdn_event_stubs::extract_event_types;
//!
//! let markdown = "\
//! - [Window](/en-US/docs/Web/API/Window)
//!   - [resize event](/en-US/docs/Web/API/Window/resize_event)
//!   - [scroll event](/en-US/docs/Web/API/Window/scroll_event)
//! ";
//!
//! let events = extract_event_types(markdown).unwrap();
//! assert_eq!(events, vec!["resize", "scroll"]);
//! ```
//!
//! ### Generating the stub
//!
//! ```no_run
//! use mdn_event_stubs::{StubGenerator, DEFAULT_OUTPUT_PATH};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let generator = StubGenerator::new()?;
//!     generator.execute(DEFAULT_OUTPUT_PATH).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod generate;
pub mod render;
pub mod retry;

// Re-export main types for convenience
pub use client::SourceClient;
pub use config::{ClientConfig, DEFAULT_OUTPUT_PATH, DEFAULT_SOURCE_URL};
pub use document::{parse_markdown, Document, Node, NodeKind};
pub use error::{Result, StubError};
pub use extract::{
    extract_all, extract_event_types, extract_token, flatten_nested_lists, is_candidate_container,
    is_leaf_shape, select_candidate_container, EVENT_SUFFIX,
};
pub use generate::{write_stub, StubGenerator};
pub use render::{RenderConfig, StubRenderer};
pub use retry::RetryConfig;
