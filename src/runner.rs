//! A single prune run: resolve the root, walk it once, report the outcome.

use crate::config::RunConfig;
use crate::deleter::{Deleter, FsDeleter};
use crate::error::Result;
use crate::resolve::resolve_root;
use crate::walker::{Removal, TreeWalker};

use std::path::PathBuf;

/// Result of a run that finished without a fatal error
#[derive(Debug)]
pub struct RunSummary {
    /// Absolute root directory that was walked
    pub root: PathBuf,
    pub removals: Vec<Removal>,
}

impl RunSummary {
    pub fn count(&self) -> usize {
        self.removals.len()
    }

    /// Sum of measured sizes, or `None` if sizes were not measured
    pub fn total_bytes(&self) -> Option<u64> {
        self.removals
            .iter()
            .map(|r| r.size)
            .sum::<Option<u64>>()
            .filter(|_| !self.removals.is_empty())
    }
}

/// Run against the real filesystem
pub fn run<F>(config: &RunConfig, on_removed: F) -> Result<RunSummary>
where
    F: FnMut(&Removal),
{
    run_with(config, FsDeleter, on_removed)
}

pub fn run_with<D, F>(config: &RunConfig, deleter: D, on_removed: F) -> Result<RunSummary>
where
    D: Deleter,
    F: FnMut(&Removal),
{
    let root = resolve_root(&config.directory)?;
    let removals = TreeWalker::new(&config.options, deleter).walk_with(&root, on_removed)?;

    Ok(RunSummary {
        root: root.path().to_path_buf(),
        removals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PruneError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_run_missing_root_deletes_nothing() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("target")).unwrap();
        let missing = dir.path().join("absent");

        let config = RunConfig::new(Some(missing.to_str().unwrap()), Some("target"), true).unwrap();
        let err = run(&config, |_| {}).unwrap_err();

        assert!(matches!(err, PruneError::NotFound { .. }));
        assert!(dir.path().join("target").exists());
    }

    #[test]
    fn test_run_reports_absolute_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("obj")).unwrap();

        let config = RunConfig::new(Some(dir.path().to_str().unwrap()), Some("obj"), false).unwrap();
        let summary = run(&config, |_| {}).unwrap();

        assert_eq!(summary.count(), 1);
        assert!(summary.removals[0].path.is_absolute());
        assert_eq!(summary.removals[0].path, summary.root.join("obj"));
    }

    #[test]
    fn test_total_bytes() {
        let measured = RunSummary {
            root: PathBuf::from("/r"),
            removals: vec![
                Removal { path: PathBuf::from("/r/a"), size: Some(3) },
                Removal { path: PathBuf::from("/r/b"), size: Some(4) },
            ],
        };
        assert_eq!(measured.total_bytes(), Some(7));

        let unmeasured = RunSummary {
            root: PathBuf::from("/r"),
            removals: vec![Removal { path: PathBuf::from("/r/a"), size: None }],
        };
        assert_eq!(unmeasured.total_bytes(), None);

        let empty = RunSummary {
            root: PathBuf::from("/r"),
            removals: Vec::new(),
        };
        assert_eq!(empty.total_bytes(), None);
    }
}
