//! prunedir - remove directories by exact name
//!
//! prunedir deletes every directory directly below a root whose name is exactly
//! equal to a given name. With `--recursive` it also descends into directories
//! that do not match and repeats the check there. A matching directory is always
//! removed as a whole and never descended into.
//!
//! ## Failure policy
//!
//! The first error ends the run. Nothing is retried, nothing is rolled back:
//! directories removed before the failure stay removed, and the error names the
//! path that failed.

pub mod config;
pub mod deleter;
pub mod error;
pub mod handle;
pub mod patterns;
pub mod report;
pub mod resolve;
pub mod runner;
pub mod walker;

// Re-export commonly used items
pub use config::RunConfig;
pub use deleter::{dir_size, Deleter, FsDeleter};
pub use error::{PruneError, Result};
pub use handle::DirHandle;
pub use resolve::resolve_root;
pub use runner::{run, run_with, RunSummary};
pub use walker::{Removal, TraversalOptions, TreeWalker};
