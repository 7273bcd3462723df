//! Path-confined, read-only access to a tree of Markdown documentation.
//!
//! The documentation root is laid out as `<root>/<library>/**/*.md`. This
//! crate provides everything needed to browse that tree without ever
//! reading or revealing anything outside of it.
//!
//! # Architecture
//!
//! - [`PathGuard`] decides whether a candidate path resolves (after following
//!   symlinks and collapsing `..`) to a location at or below the root.
//! - [`DocsReader`] implements the four read-only operations: list libraries,
//!   list files, get a file, and case-insensitive search.
//! - [`Settings`] resolves the documentation root from a TOML config file.
//!
//! Every path the reader touches goes through the guard first. Invalid input,
//! traversal attempts and I/O failures all collapse into the same empty or
//! absent result, so callers cannot learn what exists outside the root.
//!
//! # Examples
//!
//! ```no_run
//! use docbridge_core::DocsReader;
//!
//! let reader = DocsReader::from_root("./docs");
//! for library in reader.list_libraries() {
//!     println!("{library}: {} files", reader.list_files(&library).len());
//! }
//!
//! for hit in reader.search("install", None) {
//!     println!("{hit}");
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod guard;
mod reader;
mod types;

pub use config::{DEFAULT_DOCS_DIR, Settings};
pub use error::{Error, Result};
pub use guard::PathGuard;
pub use reader::{DocsReader, MAX_SEARCH_RESULTS};
pub use types::{DocFile, SearchHit};
