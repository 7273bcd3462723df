//! MCP server exposing a Markdown documentation tree.
//!
//! The documentation root is organized as `<root>/<library>/**/*.md`. This
//! crate serves it to an MCP client (an agent or assistant runtime) over
//! stdio as four read-only tools.
//!
//! # Tools
//!
//! 1. **`list_libraries`** - List top-level documentation folders
//! 2. **`list_files`** - List Markdown files in a library
//! 3. **`get_file`** - Return the raw content of one file
//! 4. **`search_docs`** - Case-insensitive search returning
//!    `[<path>] line <n>: <text>` lines, at most 30
//!
//! All access is confined to the configured root by
//! [`docbridge_core::PathGuard`]. Traversal attempts look exactly like
//! missing files.
//!
//! # Examples
//!
//! ```no_run
//! use docbridge_core::DocsReader;
//! use docbridge_server::service::DocsService;
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let reader = DocsReader::from_root("/srv/docs");
//! let service = DocsService::new(reader).serve(stdio()).await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```

pub mod service;
pub mod types;

pub use service::DocsService;
pub use types::{GetFileParams, ListFilesParams, SearchDocsParams};
