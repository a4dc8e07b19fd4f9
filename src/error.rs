//! Error taxonomy for a prune run.
//!
//! Every variant is fatal: the first error observed anywhere in the walk ends
//! the run and is reported exactly once. The `Display` output is the line shown
//! to the user.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PruneError {
    /// A required option was missing or empty. Raised before any filesystem access.
    #[error("Option used in invalid context -- {0}")]
    Configuration(String),

    /// The root directory does not exist (or a wildcard matched no directory).
    #[error("No such directory -- {}", path.display())]
    NotFound { path: PathBuf },

    /// Removing a matched directory failed.
    #[error("Operation exception -- {}, {source}", path.display())]
    Operation {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Listing the children of a directory failed mid-walk.
    #[error("Read exception -- {}, {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The root path contained wildcards that could not be parsed.
    #[error("Invalid path pattern -- {pattern}, {message}")]
    Pattern { pattern: String, message: String },
}

impl PruneError {
    /// The path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            PruneError::NotFound { path }
            | PruneError::Operation { path, .. }
            | PruneError::ReadDir { path, .. } => Some(path),
            PruneError::Configuration(_) | PruneError::Pattern { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PruneError>;
