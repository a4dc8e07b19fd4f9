//! Validated run configuration.

use crate::error::{PruneError, Result};
use crate::walker::TraversalOptions;

/// Everything a run needs, checked before the filesystem is touched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root directory argument as given (may contain wildcards)
    pub directory: String,
    pub options: TraversalOptions,
}

impl RunConfig {
    /// Build a configuration from raw option values.
    ///
    /// A missing or empty directory is reported before a missing pattern.
    pub fn new(directory: Option<&str>, pattern: Option<&str>, recursive: bool) -> Result<Self> {
        let directory = match directory {
            Some(d) if !d.is_empty() => d,
            _ => {
                return Err(PruneError::Configuration(
                    "must specify a directory.".to_string(),
                ))
            }
        };
        let pattern = match pattern {
            Some(p) if !p.is_empty() => p,
            _ => {
                return Err(PruneError::Configuration(
                    "must specify a pattern for matching.".to_string(),
                ))
            }
        };

        Ok(RunConfig {
            directory: directory.to_string(),
            options: TraversalOptions::new(pattern, recursive),
        })
    }

    pub fn with_sizes(mut self, measure_sizes: bool) -> Self {
        self.options = self.options.with_sizes(measure_sizes);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = RunConfig::new(Some("/tmp"), Some("target"), true).unwrap();
        assert_eq!(config.directory, "/tmp");
        assert_eq!(config.options.pattern, "target");
        assert!(config.options.recursive);
        assert!(!config.options.measure_sizes);
    }

    #[test]
    fn test_missing_directory() {
        let err = RunConfig::new(None, Some("target"), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Option used in invalid context -- must specify a directory."
        );
    }

    #[test]
    fn test_empty_pattern() {
        let err = RunConfig::new(Some("."), Some(""), false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Option used in invalid context -- must specify a pattern for matching."
        );
    }

    #[test]
    fn test_directory_checked_first() {
        let err = RunConfig::new(Some(""), None, false).unwrap_err();
        assert!(err.to_string().contains("must specify a directory."));
    }

    #[test]
    fn test_with_sizes() {
        let config = RunConfig::new(Some("."), Some("bin"), false)
            .unwrap()
            .with_sizes(true);
        assert!(config.options.measure_sizes);
    }
}
