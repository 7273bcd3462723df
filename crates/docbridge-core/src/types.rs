//! Domain types produced by [`DocsReader`](crate::DocsReader).

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// A documentation file read from disk.
///
/// Constructed fresh on every [`get_file`](crate::DocsReader::get_file) call;
/// nothing is cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocFile {
    /// Filename as requested, relative to its library
    pub name: String,

    /// Canonical absolute path, always inside the documentation root
    pub path: PathBuf,

    /// Full file content, decoded as UTF-8
    pub content: String,
}

/// A single line matching a search query.
///
/// # Examples
///
/// ```
/// use docbridge_core::SearchHit;
///
/// let hit = SearchHit {
///     path: "rust/book/intro.md".to_string(),
///     line: 3,
///     text: "Hello world".to_string(),
/// };
/// assert_eq!(hit.to_string(), "[rust/book/intro.md] line 3: Hello world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Path relative to the documentation root, `/`-separated
    pub path: String,

    /// 1-based line number
    pub line: usize,

    /// Matching line with surrounding whitespace trimmed
    pub text: String,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] line {}: {}", self.path, self.line, self.text)
    }
}
