//! Downward search over a directory tree

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::matcher::accepts;
use crate::resolve::absolutize;
use crate::target::Target;
use crate::types::{Options, TraversalOrder};

/// Directory crawler driven by an explicit worklist
///
/// Breadth-first crawls treat the worklist as a queue, depth-first crawls as a
/// stack. Only real directories are queued; symlinks to directories are
/// matched like any other entry but never entered.
#[derive(Debug)]
pub struct Crawler<'a> {
    /// What to look for in every directory
    target:  &'a Target,
    /// Search options
    options: &'a Options,
    /// Directories still to scan, with their depth below the root
    pending: VecDeque<(PathBuf, usize)>,
    /// Number of directories scanned so far
    visited: usize,
}

impl<'a> Crawler<'a> {
    /// Create a crawler rooted at `options.cwd`
    ///
    /// # Errors
    /// Returns `Error::Resolve` if the root cannot be made absolute.
    pub fn new(target: &'a Target, options: &'a Options) -> Result<Self> {
        let root = absolutize(&options.cwd)?;
        let mut pending = VecDeque::new();
        pending.push_back((root, 0));
        Ok(Self { target, options, pending, visited: 0 })
    }

    /// Number of directories scanned so far
    #[must_use]
    pub const fn visited(&self) -> usize {
        self.visited
    }

    /// Scan the next directory, accepting at most `budget` matches from it
    ///
    /// Returns `None` once every reachable directory has been scanned. When
    /// the budget is used up the directory's children are not queued, since
    /// the caller has everything it asked for. Candidates that cannot be
    /// inspected are logged and skipped.
    ///
    /// # Errors
    /// Fails if a directory that has to be descended into cannot be listed.
    pub fn process_next(&mut self, budget: Option<usize>) -> Result<Option<Vec<PathBuf>>> {
        let next = match self.options.order {
            TraversalOrder::BreadthFirst => self.pending.pop_front(),
            TraversalOrder::DepthFirst => self.pending.pop_back(),
        };
        let Some((dir, depth)) = next else {
            return Ok(None);
        };
        self.visited += 1;
        trace!(dir = %dir.display(), depth, "scanning");

        let mut found = Vec::new();
        for candidate in self.target.candidates(&dir) {
            if !accepts(&candidate, self.options) {
                continue;
            }
            debug!(path = %candidate.display(), depth, "match");
            found.push(candidate);
            if budget.is_some_and(|budget| found.len() >= budget) {
                return Ok(Some(found));
            }
        }

        if self.options.within_depth(depth + 1) {
            self.queue_children(&dir, depth + 1)?;
        }

        Ok(Some(found))
    }

    /// Queue the immediate subdirectories of `dir`
    fn queue_children(&mut self, dir: &Path, depth: usize) -> Result<()> {
        let read_err = |source| Error::ReadDir { path: dir.to_path_buf(), source };

        let mut children = Vec::new();
        for entry in fs::read_dir(dir).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            if entry.file_type().map_err(read_err)?.is_dir() {
                children.push(entry.path());
            }
        }
        children.sort();

        match self.options.order {
            TraversalOrder::BreadthFirst => {
                self.pending.extend(children.into_iter().map(|child| (child, depth)));
            },
            TraversalOrder::DepthFirst => {
                // Reversed so the first child in name order is popped next
                self.pending.extend(children.into_iter().rev().map(|child| (child, depth)));
            },
        }
        Ok(())
    }
}

/// Find the first `name` in the start directory or below it
///
/// The root sits at depth 0 and `options.max_depth` bounds how far below it
/// the crawl goes. `options.order` decides which of two equally valid matches
/// at different depths wins.
///
/// # Errors
/// Fails if the root cannot be resolved or a directory on the way down cannot
/// be listed. Finding nothing is `Ok(None)`.
pub fn find_down(name: &str, options: &Options) -> Result<Option<PathBuf>> {
    let target = Target::new(name);
    debug!(
        name = target.as_str(),
        cwd = %options.cwd.display(),
        depth = ?options.depth_bound(),
        order = %options.order,
        "find_down"
    );

    let mut crawler = Crawler::new(&target, options)?;
    while let Some(found) = crawler.process_next(Some(1))? {
        if let Some(path) = found.into_iter().next() {
            return Ok(Some(path));
        }
    }
    Ok(None)
}

/// Find every `name` in the start directory and below it
///
/// Results follow the crawl order of `options.order`, by entry name within a
/// directory. Collection stops as soon as `options.limit` results are held.
///
/// # Errors
/// Same as [`find_down`].
pub fn find_down_multiple(name: &str, options: &Options) -> Result<Vec<PathBuf>> {
    let target = Target::new(name);
    let cap = options.result_cap();
    debug!(
        name = target.as_str(),
        cwd = %options.cwd.display(),
        depth = ?options.depth_bound(),
        order = %options.order,
        limit = ?cap,
        "find_down_multiple"
    );

    let mut crawler = Crawler::new(&target, options)?;
    let mut results = Vec::new();
    loop {
        let budget = cap.map(|cap| cap - results.len());
        let Some(found) = crawler.process_next(budget)? else {
            break;
        };
        results.extend(found);
        if cap.is_some_and(|cap| results.len() >= cap) {
            break;
        }
    }
    debug!(matches = results.len(), visited = crawler.visited(), "find_down_multiple done");
    Ok(results)
}
