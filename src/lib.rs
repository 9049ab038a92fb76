//! `findup` - Find files and directories by walking up or down the directory
//! tree.
//!
//! Upward searches start in a directory and check it, then its parent, and so
//! on until the filesystem root or an optional stop directory. Downward
//! searches scan a directory and its descendants, breadth-first or
//! depth-first, up to a depth bound. Targets are either literal names or
//! single-segment globs such as `*.toml`.
//!
//! ```no_run
//! use findup::{PathKind, default_options, find_down_multiple, find_up};
//!
//! # fn main() -> findup::Result<()> {
//! // Nearest Cargo.toml at or above the working directory
//! let manifest = find_up("Cargo.toml", &default_options())?;
//!
//! // Every markdown file up to three levels down
//! let docs = find_down_multiple("*.md", &default_options().with_max_depth(Some(3)))?;
//!
//! // Nearest enclosing `.git` directory
//! let git = find_up(".git", &default_options().with_kind(PathKind::Directory))?;
//! # let _ = (manifest, docs, git);
//! # Ok(())
//! # }
//! ```
//!
//! All I/O is blocking and happens on the calling thread. Nothing is cached
//! between calls, and a stalled filesystem stalls the search.

#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]

pub mod ascent;
pub mod crawler;
pub mod error;
pub mod matcher;
pub mod resolve;
pub mod target;
pub mod types;

pub use ascent::{Ascent, find_up, find_up_multiple, find_up_with_matcher};
pub use crawler::{Crawler, find_down, find_down_multiple};
pub use error::{Error, Result};
pub use matcher::path_matches;
pub use target::Target;
pub use types::{Options, PathKind, TraversalOrder, default_options};
