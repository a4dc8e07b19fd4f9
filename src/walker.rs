//! Depth-first walk that removes matching directories.
//!
//! At every level the immediate subdirectories are visited in listing order.
//! A child whose name equals the pattern is deleted as a whole and never entered;
//! any other child is entered only when the walk is recursive. The first error
//! stops the walk at every level and is returned unchanged. Deletions that
//! already happened are left in place.

use crate::deleter::{dir_size, Deleter, FsDeleter};
use crate::error::{PruneError, Result};
use crate::handle::DirHandle;

use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options controlling the walk. Fixed for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Exact directory name to remove
    pub pattern: String,
    /// Descend into directories that do not match
    pub recursive: bool,
    /// Measure each matched directory before removing it
    pub measure_sizes: bool,
}

impl TraversalOptions {
    pub fn new(pattern: impl Into<String>, recursive: bool) -> Self {
        TraversalOptions {
            pattern: pattern.into(),
            recursive,
            measure_sizes: false,
        }
    }

    pub fn with_sizes(mut self, measure_sizes: bool) -> Self {
        self.measure_sizes = measure_sizes;
        self
    }
}

/// One removed directory. Emitted once per matched directory, not per descendant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Removal {
    pub path: PathBuf,
    /// Bytes freed, when sizes were measured
    pub size: Option<u64>,
}

impl fmt::Display for Removal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Removed - {}", self.path.display())
    }
}

pub struct TreeWalker<'a, D> {
    options: &'a TraversalOptions,
    deleter: D,
}

impl<'a> TreeWalker<'a, FsDeleter> {
    /// Walker that deletes from the real filesystem
    pub fn with_fs(options: &'a TraversalOptions) -> Self {
        TreeWalker::new(options, FsDeleter)
    }
}

impl<'a, D: Deleter> TreeWalker<'a, D> {
    pub fn new(options: &'a TraversalOptions, deleter: D) -> Self {
        TreeWalker { options, deleter }
    }

    /// Walk `root` and return every removal, in the order they happened.
    pub fn walk(&self, root: &DirHandle) -> Result<Vec<Removal>> {
        self.walk_with(root, |_| {})
    }

    /// Like [`walk`](Self::walk), but also hands each removal to `on_removed`
    /// as soon as it happens, so removals that precede a fatal error can still
    /// be reported.
    pub fn walk_with<F>(&self, root: &DirHandle, mut on_removed: F) -> Result<Vec<Removal>>
    where
        F: FnMut(&Removal),
    {
        if !root.exists() {
            return Err(PruneError::NotFound {
                path: root.path().to_path_buf(),
            });
        }

        debug!(
            root = %root.path().display(),
            pattern = %self.options.pattern,
            recursive = self.options.recursive,
            "starting walk"
        );

        let mut removals = Vec::new();
        self.visit(root, &mut removals, &mut on_removed)?;
        Ok(removals)
    }

    fn visit<F>(&self, dir: &DirHandle, removals: &mut Vec<Removal>, on_removed: &mut F) -> Result<()>
    where
        F: FnMut(&Removal),
    {
        // Listing is read in full so no handle stays open across the descent
        let children = dir.subdirs()?.collect::<Result<Vec<DirHandle>>>()?;

        for child in children {
            if child.matches(&self.options.pattern) {
                let size = self.options.measure_sizes.then(|| dir_size(child.path()));

                if let Err(err) = self.deleter.delete(&child) {
                    debug!(path = %child.path().display(), "removal failed, aborting walk");
                    return Err(err);
                }
                info!(path = %child.path().display(), "removed");

                let removal = Removal {
                    path: child.path().to_path_buf(),
                    size,
                };
                on_removed(&removal);
                removals.push(removal);
            } else if self.options.recursive {
                debug!(path = %child.path().display(), "descending");
                self.visit(&child, removals, on_removed)?;
            } else {
                debug!(path = %child.path().display(), "skipping");
            }
        }

        Ok(())
    }
}
