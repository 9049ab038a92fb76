//! Error types for `findup`

use std::path::PathBuf;

use arrayvec::ArrayString;
use thiserror::Error;

/// Maximum length of user-facing error messages
pub const MAX_ERROR_LENGTH: usize = 256;

/// Custom result type for `findup` operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for `findup`
///
/// Not finding anything is never an error: searches report absence as
/// `Ok(None)` or an empty `Vec`.
#[derive(Debug, Error)]
pub enum Error {
    /// Start or stop directory could not be made absolute
    #[error("cannot resolve {}: {source}", path.display())]
    Resolve {
        /// Path as given by the caller
        path:   PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Candidate could not be inspected
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        /// Candidate path
        path:   PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Symbolic link could not be read or its target inspected
    #[error("cannot resolve symlink {}: {source}", path.display())]
    Symlink {
        /// Path of the link itself
        path:   PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Directory needed for descent could not be listed
    #[error("cannot read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being listed
        path:   PathBuf,
        /// Underlying failure
        #[source]
        source: std::io::Error,
    },

    /// Glob pattern is malformed
    #[error("invalid pattern: {0}")]
    Pattern(globset::Error),

    /// Caller-supplied matcher reported a failure
    #[error("matcher failed: {0}")]
    Matcher(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Path kind value is not one of file, directory or both
    #[error("invalid path type: {0}")]
    InvalidPathKind(String),

    /// Traversal order value is not one of breadth-first or depth-first
    #[error("invalid traversal order: {0}")]
    InvalidOrder(String),
}

impl Error {
    /// Wrap a failure reported by a custom matcher
    pub fn matcher(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Matcher(err.into())
    }

    /// Get a user-friendly error message with action items
    #[must_use]
    pub fn user_message(&self) -> ArrayString<MAX_ERROR_LENGTH> {
        let mut msg = ArrayString::new();
        push_truncated(&mut msg, &format!("Error: {self}\n"));
        let tip = match self {
            Self::Stat { .. } | Self::ReadDir { .. } => {
                "Tip: Check file permissions and try again"
            },
            Self::Resolve { .. } => "Tip: Make sure the directory exists and is accessible",
            Self::Symlink { .. } => {
                "Tip: The link may be dangling; fix it or pass --no-symlinks"
            },
            Self::Pattern(_) => "Tip: Check the brackets in your glob pattern",
            Self::Matcher(_) => "Tip: The custom matcher aborted the search",
            Self::InvalidPathKind(_) => "Tip: Use one of file, directory or both",
            Self::InvalidOrder(_) => "Tip: Use one of breadth-first or depth-first",
        };
        push_truncated(&mut msg, tip);
        msg
    }
}

/// Append as much of `s` as fits, never splitting a character
fn push_truncated(buf: &mut ArrayString<MAX_ERROR_LENGTH>, s: &str) {
    for c in s.chars() {
        if buf.try_push(c).is_err() {
            break;
        }
    }
}
