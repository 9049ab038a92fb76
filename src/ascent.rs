//! Upward search: a directory, then each of its ancestors

use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::matcher::accepts;
use crate::resolve::absolutize;
use crate::target::Target;
use crate::types::Options;

/// Iterator over the start directory and its ancestors, nearest first
///
/// Ends after the filesystem root, or just before the stop directory when one
/// is configured. The stop directory itself is never yielded.
#[derive(Debug, Clone)]
pub struct Ascent {
    /// Next directory to yield
    next:    Option<PathBuf>,
    /// Exclusive upper bound
    stop_at: Option<PathBuf>,
}

impl Ascent {
    /// Resolve the start and stop directories of `options`
    ///
    /// # Errors
    /// Returns `Error::Resolve` if either directory cannot be made absolute.
    pub fn new(options: &Options) -> Result<Self> {
        let start = absolutize(&options.cwd)?;
        let stop_at = options
            .stop_at
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(absolutize)
            .transpose()?;

        Ok(Self { next: Some(start), stop_at })
    }
}

impl Iterator for Ascent {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let current = self.next.take()?;
        if self.stop_at.as_ref() == Some(&current) {
            debug!(dir = %current.display(), "reached stop directory");
            return None;
        }
        self.next = current.parent().map(Path::to_path_buf);
        Some(current)
    }
}

/// Find the nearest `name` in the start directory or one of its ancestors
///
/// `name` may be a glob such as `*.json`; the first match, in name order, of
/// the nearest directory that has any is returned. A candidate that cannot be
/// inspected, such as a dangling symlink, is logged and skipped.
///
/// # Errors
/// Fails if the start or stop directory cannot be resolved. Finding nothing is
/// `Ok(None)`.
pub fn find_up(name: &str, options: &Options) -> Result<Option<PathBuf>> {
    let target = Target::new(name);
    debug!(name = target.as_str(), cwd = %options.cwd.display(), "find_up");

    for dir in Ascent::new(options)? {
        for candidate in target.candidates(&dir) {
            if accepts(&candidate, options) {
                debug!(path = %candidate.display(), "match");
                return Ok(Some(candidate));
            }
        }
    }
    Ok(None)
}

/// Find every `name` in the start directory and its ancestors
///
/// Results are ordered nearest directory first, then by entry name. Collection
/// stops as soon as `options.limit` results are held.
///
/// # Errors
/// Same as [`find_up`].
pub fn find_up_multiple(name: &str, options: &Options) -> Result<Vec<PathBuf>> {
    let target = Target::new(name);
    let cap = options.result_cap();
    debug!(name = target.as_str(), cwd = %options.cwd.display(), limit = ?cap, "find_up_multiple");

    let mut results = Vec::new();
    for dir in Ascent::new(options)? {
        for candidate in target.candidates(&dir) {
            if !accepts(&candidate, options) {
                continue;
            }
            debug!(path = %candidate.display(), "match");
            results.push(candidate);
            if cap.is_some_and(|cap| results.len() >= cap) {
                return Ok(results);
            }
        }
    }
    Ok(results)
}

/// Walk upward, letting `matcher` decide at each directory
///
/// The matcher sees every directory the ascent visits. Returning
/// `ControlFlow::Break(value)` ends the search with `value`, which need not be
/// the directory itself; `ControlFlow::Continue(())` moves on to the parent.
/// No name matching, kind filtering or symlink handling is applied.
///
/// # Errors
/// Fails if the start or stop directory cannot be resolved, or with
/// `Error::Matcher` as soon as the matcher returns an error.
pub fn find_up_with_matcher<T, E, F>(mut matcher: F, options: &Options) -> Result<Option<T>>
where
    F: FnMut(&Path) -> std::result::Result<ControlFlow<T>, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    debug!(cwd = %options.cwd.display(), "find_up_with_matcher");

    for dir in Ascent::new(options)? {
        match matcher(&dir).map_err(Error::matcher)? {
            ControlFlow::Break(value) => return Ok(Some(value)),
            ControlFlow::Continue(()) => {},
        }
    }
    Ok(None)
}
