//! Error types for documentation access.
//!
//! These errors drive internal control flow and logging. The public
//! [`DocsReader`](crate::DocsReader) operations never return them: every
//! variant is collapsed into an empty or absent result so that "forbidden"
//! and "does not exist" look the same from the outside.
//!
//! # Examples
//!
//! ```
//! use docbridge_core::{Error, Result};
//!
//! fn require(field: &'static str, value: &str) -> Result<()> {
//!     if value.is_empty() {
//!         return Err(Error::InvalidInput { field });
//!     }
//!     Ok(())
//! }
//!
//! let err = require("library", "").unwrap_err();
//! assert!(err.is_invalid_input());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for documentation access.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty.
    #[error("Invalid input: '{field}' must not be empty")]
    InvalidInput {
        /// Name of the offending argument
        field: &'static str,
    },

    /// Path could not be resolved, or is not the expected kind of entry.
    ///
    /// Covers nonexistent paths as well as resolution failures such as
    /// permission errors while following symlinks.
    #[error("Resource not found: {}", path.display())]
    NotFound {
        /// Path that failed to resolve
        path: PathBuf,
    },

    /// Path resolves to a location outside the documentation root.
    #[error("Path escapes documentation root: {}", path.display())]
    PathEscapesRoot {
        /// Path as requested, before resolution
        path: PathBuf,
    },

    /// I/O failure while enumerating or reading.
    ///
    /// Includes UTF-8 decode failures when reading file content.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being accessed
        path: PathBuf,
        /// Underlying error cause
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when a settings file cannot be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
        /// Underlying error cause
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if this is an invalid input error.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }

    /// Returns `true` if this is a not found error.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if the path resolved outside the documentation root.
    ///
    /// # Examples
    ///
    /// ```
    /// use docbridge_core::Error;
    ///
    /// let err = Error::PathEscapesRoot {
    ///     path: "../../etc/passwd".into(),
    /// };
    /// assert!(err.is_security_error());
    /// assert!(!err.is_not_found());
    /// ```
    #[must_use]
    pub const fn is_security_error(&self) -> bool {
        matches!(self, Self::PathEscapesRoot { .. })
    }

    /// Returns `true` if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for documentation operations.
pub type Result<T> = std::result::Result<T, Error>;
