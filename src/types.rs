//! Search options and the enums that drive matching and traversal

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::Error;

/// Default number of directory levels `find_down` descends below its root
pub const DEFAULT_MAX_DEPTH: usize = 1;

/// Characters that turn a target name into a glob pattern
pub const GLOB_META: [char; 3] = ['*', '?', '['];

/// Kind of filesystem entry a search accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PathKind {
    /// Anything that is not a directory
    #[default]
    File,
    /// Directories only
    Directory,
    /// Files and directories alike
    Both,
}

impl PathKind {
    /// Whether an entry with the given directory-ness is accepted
    #[must_use]
    pub const fn accepts(self, is_dir: bool) -> bool {
        match self {
            Self::File => !is_dir,
            Self::Directory => is_dir,
            Self::Both => true,
        }
    }
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Both => "both",
        })
    }
}

impl FromStr for PathKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "f" | "file" => Ok(Self::File),
            "d" | "dir" | "directory" => Ok(Self::Directory),
            "both" | "any" => Ok(Self::Both),
            _ => Err(Error::InvalidPathKind(s.to_owned())),
        }
    }
}

impl TryFrom<i64> for PathKind {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::File),
            1 => Ok(Self::Directory),
            2 => Ok(Self::Both),
            other => Err(Error::InvalidPathKind(other.to_string())),
        }
    }
}

/// Order in which `find_down` visits descendant directories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum TraversalOrder {
    /// Every directory at one depth is scanned before any directory below it
    #[default]
    BreadthFirst,
    /// Each subtree is exhausted before its next sibling is entered
    DepthFirst,
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BreadthFirst => "breadth-first",
            Self::DepthFirst => "depth-first",
        })
    }
}

impl FromStr for TraversalOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth" | "depth-first" => Ok(Self::DepthFirst),
            _ => Err(Error::InvalidOrder(s.to_owned())),
        }
    }
}

impl TryFrom<i64> for TraversalOrder {
    type Error = Error;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::BreadthFirst),
            1 => Ok(Self::DepthFirst),
            other => Err(Error::InvalidOrder(other.to_string())),
        }
    }
}

/// Configuration shared by every search function
///
/// Walkers only ever borrow the options, so one value can drive any number of
/// searches, including concurrent ones on other threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory the search starts from; empty means the working directory
    pub cwd:            PathBuf,
    /// Kind of entry to accept
    pub kind:           PathKind,
    /// Whether symbolic links are followed and matched
    pub allow_symlinks: bool,
    /// Exclusive upper bound for upward searches
    pub stop_at:        Option<PathBuf>,
    /// Maximum number of results for multi-result searches; `0` is unbounded
    pub limit:          Option<usize>,
    /// Deepest directory level scanned by downward searches; `0` is unbounded
    pub max_depth:      Option<usize>,
    /// Visiting order for downward searches
    pub order:          TraversalOrder,
}

/// Options used when the caller has no preferences
#[must_use]
pub fn default_options() -> Options {
    Options {
        cwd:            PathBuf::from("."),
        kind:           PathKind::File,
        allow_symlinks: true,
        stop_at:        None,
        limit:          None,
        max_depth:      Some(DEFAULT_MAX_DEPTH),
        order:          TraversalOrder::BreadthFirst,
    }
}

impl Default for Options {
    fn default() -> Self {
        default_options()
    }
}

impl Options {
    /// Start the search from `cwd`
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// Accept only entries of `kind`
    pub const fn with_kind(mut self, kind: PathKind) -> Self {
        self.kind = kind;
        self
    }

    /// Enable or disable symlink matching
    pub const fn with_symlinks(mut self, allow: bool) -> Self {
        self.allow_symlinks = allow;
        self
    }

    /// Stop upward searches before scanning `dir`
    pub fn with_stop_at(mut self, dir: impl Into<PathBuf>) -> Self {
        self.stop_at = Some(dir.into());
        self
    }

    /// Cap multi-result searches at `limit` results
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Bound downward searches to `depth` levels below the root
    pub const fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Visit descendants in `order`
    pub const fn with_order(mut self, order: TraversalOrder) -> Self {
        self.order = order;
        self
    }

    /// Effective result cap, with zero folded into "unbounded"
    #[must_use]
    pub fn result_cap(&self) -> Option<usize> {
        self.limit.filter(|&n| n > 0)
    }

    /// Effective depth bound, with zero folded into "unbounded"
    #[must_use]
    pub fn depth_bound(&self) -> Option<usize> {
        self.max_depth.filter(|&n| n > 0)
    }

    /// Whether a directory at `depth` lies inside the depth bound
    #[must_use]
    pub fn within_depth(&self, depth: usize) -> bool {
        self.depth_bound().is_none_or(|max| depth <= max)
    }
}

const _: () = {
    assert!(DEFAULT_MAX_DEPTH > 0);
    assert!(!GLOB_META.is_empty());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = default_options();
        assert_eq!(options.cwd, PathBuf::from("."));
        assert_eq!(options.kind, PathKind::File);
        assert!(options.allow_symlinks);
        assert_eq!(options.stop_at, None);
        assert_eq!(options.limit, None);
        assert_eq!(options.max_depth, Some(1));
        assert_eq!(options.order, TraversalOrder::BreadthFirst);
        assert_eq!(Options::default(), options);
    }

    #[test]
    fn test_path_kind_accepts() {
        assert!(PathKind::File.accepts(false));
        assert!(!PathKind::File.accepts(true));
        assert!(PathKind::Directory.accepts(true));
        assert!(!PathKind::Directory.accepts(false));
        assert!(PathKind::Both.accepts(true));
        assert!(PathKind::Both.accepts(false));
    }

    #[test]
    fn test_path_kind_codes() {
        assert_eq!(PathKind::try_from(0_i64).unwrap(), PathKind::File);
        assert_eq!(PathKind::try_from(1_i64).unwrap(), PathKind::Directory);
        assert_eq!(PathKind::try_from(2_i64).unwrap(), PathKind::Both);
        assert!(matches!(PathKind::try_from(3_i64), Err(Error::InvalidPathKind(code)) if code == "3"));
        assert!(matches!(PathKind::try_from(-1_i64), Err(Error::InvalidPathKind(_))));
    }

    #[test]
    fn test_path_kind_parse() {
        assert_eq!("file".parse::<PathKind>().unwrap(), PathKind::File);
        assert_eq!("DIR".parse::<PathKind>().unwrap(), PathKind::Directory);
        assert_eq!("both".parse::<PathKind>().unwrap(), PathKind::Both);
        assert!(matches!("socket".parse::<PathKind>(), Err(Error::InvalidPathKind(_))));
    }

    #[test]
    fn test_traversal_order_codes_and_parse() {
        assert_eq!(TraversalOrder::try_from(0_i64).unwrap(), TraversalOrder::BreadthFirst);
        assert_eq!(TraversalOrder::try_from(1_i64).unwrap(), TraversalOrder::DepthFirst);
        assert!(matches!(TraversalOrder::try_from(7_i64), Err(Error::InvalidOrder(_))));
        assert_eq!("dfs".parse::<TraversalOrder>().unwrap(), TraversalOrder::DepthFirst);
        assert_eq!(
            "breadth-first".parse::<TraversalOrder>().unwrap(),
            TraversalOrder::BreadthFirst
        );
        assert!(matches!("random".parse::<TraversalOrder>(), Err(Error::InvalidOrder(_))));
    }

    #[test]
    fn test_zero_limits_are_unbounded() {
        let options = default_options().with_limit(Some(0)).with_max_depth(Some(0));
        assert_eq!(options.result_cap(), None);
        assert_eq!(options.depth_bound(), None);
        assert!(options.within_depth(10_000));

        let options = default_options().with_limit(Some(3)).with_max_depth(Some(2));
        assert_eq!(options.result_cap(), Some(3));
        assert!(options.within_depth(2));
        assert!(!options.within_depth(3));
    }

    #[test]
    fn test_builders() {
        let options = default_options()
            .with_cwd("/tmp")
            .with_kind(PathKind::Both)
            .with_symlinks(false)
            .with_stop_at("/")
            .with_order(TraversalOrder::DepthFirst);
        assert_eq!(options.cwd, PathBuf::from("/tmp"));
        assert_eq!(options.kind, PathKind::Both);
        assert!(!options.allow_symlinks);
        assert_eq!(options.stop_at, Some(PathBuf::from("/")));
        assert_eq!(options.order, TraversalOrder::DepthFirst);
    }
}
