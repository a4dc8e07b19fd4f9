//! Directory name matching.
//!
//! The selection criterion is literal name equality. `*`, `?` and friends have
//! no special meaning here; a directory literally named `*` is matched only by
//! the pattern `*`.

use std::ffi::OsStr;

/// Check whether a bare directory name equals the pattern
pub fn matches(name: &str, pattern: &str) -> bool {
    name == pattern
}

/// Same as [`matches`] for an OS-level name. Names that are not valid UTF-8 never match.
pub fn matches_os(name: &OsStr, pattern: &str) -> bool {
    name.to_str().is_some_and(|name| matches(name, pattern))
}
