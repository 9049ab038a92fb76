//! Target names and the candidates they produce in a directory

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::GLOB_META;

/// What a search looks for in each directory it visits
#[derive(Debug, Clone)]
pub enum Target {
    /// A single literal entry name
    Name(String),
    /// A single-segment shell pattern such as `*.toml`
    Glob {
        /// Pattern as written by the caller
        pattern:  String,
        /// Compiled pattern, or why it failed to compile
        compiled: std::result::Result<GlobMatcher, globset::Error>,
    },
}

impl Target {
    /// Classify `name` as a literal or a glob
    ///
    /// Glob compilation errors are kept rather than returned; they surface per
    /// entry from [`Target::matches_name`].
    #[must_use]
    pub fn new(name: &str) -> Self {
        if !is_glob(name) {
            return Self::Name(name.to_owned());
        }

        let compiled = GlobBuilder::new(name)
            .literal_separator(true)
            .build()
            .map(|glob| glob.compile_matcher());
        Self::Glob { pattern: name.to_owned(), compiled }
    }

    /// The name or pattern this target was built from
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Glob { pattern, .. } => pattern,
        }
    }

    /// Check a single entry name against the target
    ///
    /// # Errors
    /// Returns `Error::Pattern` if the glob is malformed.
    pub fn matches_name(&self, name: &OsStr) -> Result<bool> {
        match self {
            Self::Name(expected) => Ok(name == OsStr::new(expected)),
            Self::Glob { compiled: Ok(matcher), .. } => Ok(matcher.is_match(Path::new(name))),
            Self::Glob { compiled: Err(e), .. } => Err(Error::Pattern(e.clone())),
        }
    }

    /// Paths in `dir` that may satisfy the target, in scan order
    ///
    /// A literal yields exactly `dir/name` whether or not it exists. A glob
    /// lists `dir` and yields matching entries sorted by name; a directory that
    /// cannot be listed simply has no candidates.
    #[must_use]
    pub fn candidates(&self, dir: &Path) -> Vec<PathBuf> {
        let Self::Glob { .. } = self else {
            return vec![dir.join(self.as_str())];
        };

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "skipping unreadable directory");
                return Vec::new();
            },
        };

        let mut names: Vec<_> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry.file_name()),
                Err(e) => {
                    trace!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                    None
                },
            })
            .collect();
        names.sort();

        names
            .into_iter()
            .filter(|name| match self.matches_name(name) {
                Ok(matched) => matched,
                Err(e) => {
                    trace!(name = ?name, error = %e, "skipping entry");
                    false
                },
            })
            .map(|name| dir.join(name))
            .collect()
    }
}

/// Whether `name` contains any glob metacharacter
#[must_use]
pub fn is_glob(name: &str) -> bool {
    name.contains(GLOB_META)
}
