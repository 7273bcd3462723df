//! Parameter types for the documentation tools.
//!
//! `list_libraries` takes no arguments; the other three tools take the
//! structs below. Field doc comments become the JSON Schema descriptions
//! shown to the calling agent.

use schemars::JsonSchema;
use serde::Deserialize;

// ============================================================================
// list_files types
// ============================================================================

/// Parameters for listing the files of a library.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// Library name (a top-level folder, e.g. "axum")
    pub library: String,
}

// ============================================================================
// get_file types
// ============================================================================

/// Parameters for reading a single documentation file.
///
/// # Examples
///
/// ```
/// use docbridge_server::types::GetFileParams;
///
/// let params = GetFileParams {
///     library: "axum".to_string(),
///     filename: "guides/routing.md".to_string(),
/// };
/// ```
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileParams {
    /// Library name (a top-level folder, e.g. "axum")
    pub library: String,

    /// File path relative to the library, as returned by `list_files`
    pub filename: String,
}

// ============================================================================
// search_docs types
// ============================================================================

/// Parameters for searching documentation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchDocsParams {
    /// Text to look for (case-insensitive substring)
    pub query: String,

    /// Restrict the search to this library (default: all libraries)
    #[serde(default)]
    pub library: Option<String>,
}
