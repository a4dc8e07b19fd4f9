//! Turning the `--directory` argument into a concrete root directory.

use crate::error::{PruneError, Result};
use crate::handle::DirHandle;

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check if a string contains wildcard characters
pub fn contains_wildcard(s: &str) -> bool {
    s.contains('*') || s.contains('?') || s.contains('[')
}

/// Resolve the root directory for a run.
///
/// An existing directory is used as given, even if its name contains wildcard
/// characters. Otherwise wildcards are expanded with `glob` and the
/// lexicographically first matching directory is used. The result is always an
/// absolute path.
pub fn resolve_root(directory: &str) -> Result<DirHandle> {
    let literal = Path::new(directory);
    let candidate = if literal.is_dir() || !contains_wildcard(directory) {
        literal.to_path_buf()
    } else {
        expand_directory(directory)?
    };

    let absolute = fs::canonicalize(&candidate).map_err(|_| PruneError::NotFound {
        path: std::path::absolute(&candidate).unwrap_or(candidate),
    })?;
    debug!(root = %absolute.display(), "resolved root directory");

    DirHandle::open(absolute)
}

fn expand_directory(pattern: &str) -> Result<PathBuf> {
    let paths = glob::glob(pattern).map_err(|e| PruneError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    // Unreadable entries cannot be a root anyway
    let mut dirs: Vec<PathBuf> = paths.flatten().filter(|p| p.is_dir()).collect();
    dirs.sort();

    dirs.into_iter().next().ok_or_else(|| {
        let pattern = Path::new(pattern);
        PruneError::NotFound {
            path: std::path::absolute(pattern).unwrap_or_else(|_| pattern.to_path_buf()),
        }
    })
}
