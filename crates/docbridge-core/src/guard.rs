//! Confinement of filesystem access to the documentation root.
//!
//! [`PathGuard`] is the only security boundary in the crate. A candidate path
//! is safe when its canonical form (symlinks followed, `.` and `..`
//! collapsed) is the root itself or lies below it. Containment is checked
//! per path component, so a sibling such as `/srv/docs-private` is never
//! considered inside `/srv/docs`.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Decides whether paths resolve inside a fixed documentation root.
///
/// The root is resolved once at construction and never changes.
///
/// # Examples
///
/// ```
/// use docbridge_core::PathGuard;
/// # use tempfile::TempDir;
///
/// # let temp = TempDir::new().unwrap();
/// # std::fs::create_dir(temp.path().join("rust")).unwrap();
/// let guard = PathGuard::new(temp.path());
///
/// assert!(guard.is_safe(&guard.root().join("rust")));
/// assert!(!guard.is_safe(&guard.root().join("..")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGuard {
    root: PathBuf,
}

impl PathGuard {
    /// Creates a guard for `root`.
    ///
    /// The root is canonicalized when it exists. A missing root falls back to
    /// its absolute form; such a guard rejects every candidate below it
    /// because nothing there can be resolved.
    #[must_use]
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let root = std::fs::canonicalize(root)
            .or_else(|_| std::path::absolute(root))
            .unwrap_or_else(|_| root.to_path_buf());

        Self { root }
    }

    /// Returns the resolved documentation root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns `true` if `candidate` resolves to the root or a descendant.
    ///
    /// Resolution failures of any kind (missing path, permission denied,
    /// symlink loop) count as unsafe.
    #[must_use]
    pub fn is_safe(&self, candidate: &Path) -> bool {
        self.resolve(candidate).is_ok()
    }

    /// Resolves `candidate` to its canonical path, if it stays inside the root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the path cannot be canonicalized and
    /// [`Error::PathEscapesRoot`] if it resolves outside the root.
    pub fn resolve(&self, candidate: &Path) -> Result<PathBuf> {
        let canonical = std::fs::canonicalize(candidate).map_err(|_| Error::NotFound {
            path: candidate.to_path_buf(),
        })?;

        if canonical.starts_with(&self.root) {
            Ok(canonical)
        } else {
            Err(Error::PathEscapesRoot {
                path: candidate.to_path_buf(),
            })
        }
    }
}
