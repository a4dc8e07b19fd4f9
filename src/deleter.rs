//! Irreversible directory removal.

use crate::error::{PruneError, Result};
use crate::handle::DirHandle;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Removes a directory and everything beneath it
pub trait Deleter {
    /// Delete `dir` recursively. Any failure is reported as
    /// [`PruneError::Operation`] carrying the directory's path; nothing is retried.
    fn delete(&self, dir: &DirHandle) -> Result<()>;
}

impl<D: Deleter + ?Sized> Deleter for &D {
    fn delete(&self, dir: &DirHandle) -> Result<()> {
        (**self).delete(dir)
    }
}

/// Deleter backed by `std::fs::remove_dir_all`
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDeleter;

impl Deleter for FsDeleter {
    fn delete(&self, dir: &DirHandle) -> Result<()> {
        debug!(path = %dir.path().display(), "removing directory");
        fs::remove_dir_all(dir.path()).map_err(|source| PruneError::Operation {
            path: dir.path().to_path_buf(),
            source,
        })
    }
}

/// Total size of the files under a directory.
///
/// Symlinks are not followed. Entries that cannot be read are logged and
/// count as zero; measuring never fails.
pub fn dir_size(path: &Path) -> u64 {
    let mut total = 0u64;
    let mut pending = vec![path.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(path = %dir.display(), error = %err, "cannot list directory for sizing");
                continue;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    debug!(path = %dir.display(), error = %err, "cannot read entry for sizing");
                    continue;
                }
            };

            // DirEntry::metadata does not traverse symlinks
            match entry.metadata() {
                Ok(meta) if meta.is_dir() => pending.push(entry.path()),
                Ok(meta) if meta.is_file() => total += meta.len(),
                Ok(_) => {}
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "cannot stat entry for sizing");
                }
            }
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use tempfile::tempdir;

    #[test]
    fn test_delete_removes_whole_subtree() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        fs::create_dir_all(target.join("debug/deps")).unwrap();
        fs::write(target.join("debug/deps/lib.rlib"), "binary").unwrap();

        let handle = DirHandle::open(&target).unwrap();
        FsDeleter.delete(&handle).unwrap();

        assert!(!target.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_delete_vanished_directory_is_operation_error() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone");
        fs::create_dir(&gone).unwrap();
        let handle = DirHandle::open(&gone).unwrap();

        // Removed between listing and deletion
        fs::remove_dir(&gone).unwrap();

        match FsDeleter.delete(&handle) {
            Err(PruneError::Operation { path, source }) => {
                assert_eq!(path, gone);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected Operation error, got {:?}", other),
        }
    }

    #[test]
    fn test_dir_size_sums_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("a/one.txt"), "12345").unwrap();
        fs::write(dir.path().join("a/b/two.txt"), "123").unwrap();

        assert_eq!(dir_size(dir.path()), 8);
    }

    #[cfg(unix)]
    #[test]
    fn test_dir_size_ignores_symlinked_content() {
        let dir = tempdir().unwrap();
        let outside = dir.path().join("outside");
        let measured = dir.path().join("measured");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&measured).unwrap();
        fs::write(outside.join("big.bin"), vec![0u8; 4096]).unwrap();
        fs::write(measured.join("small.txt"), "abc").unwrap();
        std::os::unix::fs::symlink(&outside, measured.join("link")).unwrap();

        assert_eq!(dir_size(&measured), 3);
    }

    #[test]
    fn test_dir_size_missing_path_is_zero() {
        let dir = tempdir().unwrap();
        assert_eq!(dir_size(&dir.path().join("nope")), 0);
    }
}
