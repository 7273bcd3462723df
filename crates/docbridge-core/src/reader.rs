//! Read-only operations over the documentation tree.
//!
//! Every operation validates the paths it touches with [`PathGuard`] before
//! reading anything. Recursive enumeration follows symlinks, so each file
//! found is checked again: a symlinked directory inside the root that points
//! elsewhere contributes nothing.
//!
//! Failures never escape this module. Empty arguments, traversal attempts,
//! missing paths and unreadable files all produce the same empty or absent
//! result; the reason is only logged at debug level.

use crate::error::{Error, Result};
use crate::guard::PathGuard;
use crate::types::{DocFile, SearchHit};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Maximum number of hits returned by a single search.
pub const MAX_SEARCH_RESULTS: usize = 30;

const MARKDOWN_EXTENSION: &str = "md";

/// Reader for a documentation root of `<library>/**/*.md` files.
///
/// Holds no state besides the immutable guard, so a single instance can be
/// shared freely between threads.
///
/// # Examples
///
/// ```
/// use docbridge_core::DocsReader;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// # std::fs::create_dir(temp.path().join("tokio")).unwrap();
/// # std::fs::write(temp.path().join("tokio/runtime.md"), "# Runtime\nSpawn tasks").unwrap();
/// let reader = DocsReader::from_root(temp.path());
///
/// assert_eq!(reader.list_libraries(), vec!["tokio"]);
/// assert_eq!(reader.list_files("tokio"), vec!["runtime.md"]);
///
/// let hits = reader.search("SPAWN", None);
/// assert_eq!(hits[0].to_string(), "[tokio/runtime.md] line 2: Spawn tasks");
///
/// assert!(reader.get_file("tokio", "../../etc/passwd").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct DocsReader {
    guard: PathGuard,
}

impl DocsReader {
    /// Creates a reader confined by `guard`.
    #[must_use]
    pub const fn new(guard: PathGuard) -> Self {
        Self { guard }
    }

    /// Creates a reader for the documentation root at `root`.
    #[must_use]
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::new(PathGuard::new(root))
    }

    /// Returns the resolved documentation root.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.guard.root()
    }

    /// Lists library names: the directories directly under the root.
    ///
    /// Returns an empty list if the root is missing or unreadable.
    #[must_use]
    pub fn list_libraries(&self) -> Vec<String> {
        self.try_list_libraries()
            .unwrap_or_else(|e| collapse("list_libraries", &e))
    }

    /// Lists Markdown files in `library`, recursively.
    ///
    /// Paths are relative to the library directory and `/`-separated.
    /// Returns an empty list if the library is empty, missing, not a
    /// directory, or outside the root.
    #[must_use]
    pub fn list_files(&self, library: &str) -> Vec<String> {
        self.try_list_files(library)
            .unwrap_or_else(|e| collapse("list_files", &e))
    }

    /// Reads `filename` from `library`.
    ///
    /// Returns `None` if either argument is empty, the path resolves outside
    /// the root, is not a regular file, or is not valid UTF-8.
    #[must_use]
    pub fn get_file(&self, library: &str, filename: &str) -> Option<DocFile> {
        self.try_get_file(library, filename)
            .map_err(|e| collapse::<()>("get_file", &e))
            .ok()
    }

    /// Case-insensitive substring search over Markdown files.
    ///
    /// Searches `library` when given and non-empty, otherwise the whole
    /// root. Emits one hit per matching line in enumeration order and stops
    /// after [`MAX_SEARCH_RESULTS`] hits. Unreadable files are skipped.
    #[must_use]
    pub fn search(&self, query: &str, library: Option<&str>) -> Vec<SearchHit> {
        self.try_search(query, library)
            .unwrap_or_else(|e| collapse("search", &e))
    }

    fn try_list_libraries(&self) -> Result<Vec<String>> {
        let root = self.root();
        let entries = fs::read_dir(root).map_err(|e| Error::io(root, e))?;

        let mut libraries: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| {
                let path = entry.path();
                path.is_dir() && self.guard.is_safe(&path)
            })
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect();

        libraries.sort();
        Ok(libraries)
    }

    fn try_list_files(&self, library: &str) -> Result<Vec<String>> {
        let library_dir = self.library_dir(library)?;

        Ok(self
            .markdown_files(&library_dir)?
            .filter_map(|path| relative_display(&path, &library_dir))
            .collect())
    }

    fn try_get_file(&self, library: &str, filename: &str) -> Result<DocFile> {
        require("library", library)?;
        require("filename", filename)?;

        let path = self
            .guard
            .resolve(&self.root().join(library).join(filename))?;
        if !path.is_file() {
            return Err(Error::NotFound { path });
        }

        let content = fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        Ok(DocFile {
            name: filename.to_string(),
            path,
            content,
        })
    }

    fn try_search(&self, query: &str, library: Option<&str>) -> Result<Vec<SearchHit>> {
        require("query", query)?;

        let search_root = match library.filter(|l| !l.is_empty()) {
            Some(library) => self.library_dir(library)?,
            None => self.root().to_path_buf(),
        };

        let needle = query.to_lowercase();
        let mut hits = Vec::new();

        for path in self.markdown_files(&search_root)? {
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!("Skipping unreadable file {}: {}", path.display(), e);
                    continue;
                }
            };

            // Cheap reject before scanning line by line
            if !content.to_lowercase().contains(&needle) {
                continue;
            }

            let Some(relative) = relative_display(&path, self.root()) else {
                continue;
            };

            for (index, line) in split_lines(&content).into_iter().enumerate() {
                if !line.to_lowercase().contains(&needle) {
                    continue;
                }

                hits.push(SearchHit {
                    path: relative.clone(),
                    line: index + 1,
                    text: line.trim().to_string(),
                });

                if hits.len() >= MAX_SEARCH_RESULTS {
                    return Ok(hits);
                }
            }
        }

        Ok(hits)
    }

    /// Returns the directory for a library name, as joined onto the root.
    ///
    /// The canonical form must be a directory inside the root, but the
    /// unresolved path is returned so reported paths keep the name the
    /// caller used, even when the library is a symlink.
    fn library_dir(&self, library: &str) -> Result<PathBuf> {
        require("library", library)?;

        let dir = self.root().join(library);
        let canonical = self.guard.resolve(&dir)?;
        if !canonical.is_dir() {
            return Err(Error::NotFound { path: canonical });
        }

        Ok(dir)
    }

    /// Enumerates Markdown files under `dir` in file-name order.
    ///
    /// Fails only if `dir` itself cannot be read. Entries that cannot be
    /// read further down (permission errors, symlink loops) are skipped, as
    /// are files that resolve outside the root.
    fn markdown_files(&self, dir: &Path) -> Result<impl Iterator<Item = PathBuf>> {
        fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        let walker = WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter();

        Ok(walker.filter_map(move |entry| match entry {
            Ok(entry) => self.accept_markdown(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
                None
            }
        }))
    }

    fn accept_markdown(&self, entry: DirEntry) -> Option<PathBuf> {
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            return None;
        }

        // SECURITY: a symlink inside the root may point anywhere
        if !self.guard.is_safe(entry.path()) {
            tracing::debug!(
                "Skipping file outside documentation root: {}",
                entry.path().display()
            );
            return None;
        }

        Some(entry.into_path())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::InvalidInput { field });
    }
    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

/// Splits text into lines at every Unicode line boundary.
///
/// Breaks on `\n`, `\r`, `\r\n`, vertical tab, form feed, the file/group/
/// record separators, NEL, and the line and paragraph separators. A final
/// break does not produce a trailing empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }

        lines.push(&text[start..index]);
        start = index + ch.len_utf8();

        if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Renders `path` relative to `base` with `/` separators.
fn relative_display(path: &Path, base: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    Some(relative.to_string_lossy().replace('\\', "/"))
}

/// Logs why an operation produced nothing and returns the empty value.
fn collapse<T: Default>(operation: &str, error: &Error) -> T {
    tracing::debug!("{operation} returned no result: {error}");
    T::default()
}
