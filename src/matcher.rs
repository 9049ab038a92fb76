//! Candidate validation: existence, symlink policy and entry kind

use std::fs::{self, Metadata};
use std::io;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::types::Options;

/// Decide whether `path` is an acceptable match under `options`
///
/// A missing path is simply not a match. Symlinks are rejected outright when
/// `allow_symlinks` is off; otherwise the link is resolved (relative targets
/// against the link's own directory) and the target's kind is checked.
///
/// # Errors
/// Returns `Error::Stat` when the path exists but cannot be inspected, and
/// `Error::Symlink` when a link cannot be read or points nowhere.
pub fn path_matches(path: &Path, options: &Options) -> Result<bool> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if is_absent(&e) => return Ok(false),
        Err(source) => return Err(Error::Stat { path: path.to_path_buf(), source }),
    };

    let metadata = if metadata.file_type().is_symlink() {
        if !options.allow_symlinks {
            trace!(path = %path.display(), "symlink rejected");
            return Ok(false);
        }
        resolve_link(path)?
    } else {
        metadata
    };

    let accepted = options.kind.accepts(metadata.is_dir());
    if !accepted {
        trace!(path = %path.display(), kind = %options.kind, "wrong entry kind");
    }
    Ok(accepted)
}

/// Walker-side view of [`path_matches`]: a candidate that cannot be inspected
/// is logged and treated as not matching, so the search moves on
pub(crate) fn accepts(candidate: &Path, options: &Options) -> bool {
    match path_matches(candidate, options) {
        Ok(accepted) => accepted,
        Err(e) => {
            debug!(path = %candidate.display(), error = %e, "skipping candidate");
            false
        },
    }
}

/// Metadata of the entry a symbolic link points at
fn resolve_link(link: &Path) -> Result<Metadata> {
    let symlink_err = |source| Error::Symlink { path: link.to_path_buf(), source };

    let target = fs::read_link(link).map_err(symlink_err)?;
    let target = match link.parent() {
        Some(parent) if target.is_relative() => parent.join(target),
        _ => target,
    };
    fs::metadata(&target).map_err(symlink_err)
}

/// Errors that mean "nothing there" rather than "could not look"
fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}
