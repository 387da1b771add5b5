//! Error types for the wincanon library.
//!
//! This module provides the error hierarchy for path canonicalization and
//! configuration loading, using `thiserror` for ergonomic error handling.
//! Errors are always returned as values; the canonicalization core never
//! panics, never logs, and never aborts the process.

use thiserror::Error;

/// Result type alias for operations that may fail with a wincanon error.
///
/// # Examples
///
/// ```
/// use wincanon::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("C:\\Users".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the wincanon library.
///
/// This enum encompasses all failure modes of path canonicalization plus
/// the errors surfaced by the configuration subsystem.
#[derive(Debug, Error)]
pub enum Error {
    /// A `~user` home form was encountered. Only `~` and `~/path` are
    /// supported.
    #[error("unsupported home form '{fragment}': only ~ and ~/path are supported")]
    UnsupportedHomeForm {
        /// The offending leading fragment (e.g. `~user`).
        fragment: String,
    },

    /// The path begins with `~` but no home directory value is available.
    #[error("cannot determine home directory for tilde expansion")]
    HomeUnresolvable,

    /// A rooted path contains more `..` segments than it has parents.
    #[error("path '{path}' escapes its root: too many '..' segments")]
    EscapesRoot {
        /// The input path that escaped its root.
        path: String,
    },

    /// A drive specifier could not be understood, e.g. a drive-relative
    /// path (`C:foo`) or a mount prefix not followed by a drive letter.
    #[error("malformed drive specifier '{fragment}'")]
    MalformedDriveSpecifier {
        /// The offending fragment.
        fragment: String,
    },

    /// A backslash-escape sequence was encountered in strict mode.
    ///
    /// The permissive default passes these sequences through untouched;
    /// this error is only produced when strict escape checking is enabled.
    #[error("ambiguous escape sequence '{fragment}'")]
    AmbiguousEscape {
        /// The two-character escape sequence.
        fragment: String,
    },

    /// A UNC path (`\\server\share\...`) was encountered. UNC paths are
    /// explicitly unsupported.
    #[error("unsupported UNC path '{path}'")]
    UnsupportedUncPath {
        /// The input path.
        path: String,
    },

    /// The input path was empty.
    #[error("empty path")]
    EmptyPath,

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if the error indicates a rooted path escaping its root.
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::Error;
    ///
    /// let err = Error::EscapesRoot { path: "/a/../..".to_string() };
    /// assert!(err.is_root_escape());
    /// ```
    #[must_use]
    pub fn is_root_escape(&self) -> bool {
        matches!(self, Self::EscapesRoot { .. })
    }

    /// Check if the error stems from an explicitly unsupported path form
    /// (UNC paths or `~user` home forms).
    ///
    /// # Examples
    ///
    /// ```
    /// use wincanon::Error;
    ///
    /// let err = Error::UnsupportedUncPath { path: r"\\srv\share".to_string() };
    /// assert!(err.is_unsupported_form());
    /// ```
    #[must_use]
    pub fn is_unsupported_form(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedUncPath { .. } | Self::UnsupportedHomeForm { .. }
        )
    }
}
