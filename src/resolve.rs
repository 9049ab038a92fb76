//! Absolute path resolution for search roots

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Make `path` absolute against the working directory and fold `.`/`..`
///
/// The result is lexical: symlinks along the way are not resolved, so a stop
/// directory given through a link compares equal only to the same spelling.
///
/// # Errors
/// Returns `Error::Resolve` if the working directory cannot be determined.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let path = if path.as_os_str().is_empty() { Path::new(".") } else { path };

    if path.is_absolute() {
        return Ok(normalize(path));
    }

    let cwd = env::current_dir()
        .map_err(|source| Error::Resolve { path: path.to_path_buf(), source })?;
    Ok(normalize(&cwd.join(path)))
}

/// Lexically clean an absolute path
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                // `..` at the root stays at the root
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
