//! Directory handles and lazy subdirectory listing.

use crate::error::{PruneError, Result};
use crate::patterns;

use std::borrow::Cow;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// A reference to a directory on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirHandle {
    path: PathBuf,
}

impl DirHandle {
    /// Open a handle to an existing directory.
    ///
    /// Fails with [`PruneError::NotFound`] if the path does not exist or is not
    /// a directory.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_dir() {
            return Err(PruneError::NotFound { path });
        }
        Ok(DirHandle { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bare name of the directory (the final path component)
    pub fn name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    pub fn name_lossy(&self) -> Cow<'_, str> {
        self.name().map(|n| n.to_string_lossy()).unwrap_or_default()
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn matches(&self, pattern: &str) -> bool {
        self.name()
            .is_some_and(|name| patterns::matches_os(name, pattern))
    }

    /// Lazily list the immediate subdirectories, in the order the OS returns them.
    ///
    /// Files are skipped. Symbolic links are skipped as well, even when they
    /// point at a directory, so a link back to an ancestor can never send the
    /// walk around in circles.
    pub fn subdirs(&self) -> Result<Subdirs> {
        let entries = fs::read_dir(&self.path).map_err(|source| PruneError::ReadDir {
            path: self.path.clone(),
            source,
        })?;
        Ok(Subdirs {
            parent: self.path.clone(),
            entries,
        })
    }
}

/// Iterator over the immediate subdirectories of a directory
pub struct Subdirs {
    parent: PathBuf,
    entries: fs::ReadDir,
}

impl Iterator for Subdirs {
    type Item = Result<DirHandle>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(PruneError::ReadDir {
                        path: self.parent.clone(),
                        source,
                    }))
                }
            };

            // DirEntry::file_type does not follow symlinks
            let file_type = match entry.file_type() {
                Ok(ft) => ft,
                Err(source) => {
                    return Some(Err(PruneError::ReadDir {
                        path: entry.path(),
                        source,
                    }))
                }
            };

            if file_type.is_dir() {
                return Some(Ok(DirHandle { path: entry.path() }));
            }
        }
    }
}
