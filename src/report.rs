//! Text shown to the user for removals and the end-of-run summary.

use crate::runner::RunSummary;
use crate::walker::Removal;

use humansize::{format_size, BINARY};

pub const REMOVED_PREFIX: &str = "Removed -";

/// The part of a removal line after [`REMOVED_PREFIX`]: the path, plus the freed
/// size when it was measured
pub fn removal_detail(removal: &Removal) -> String {
    match removal.size {
        Some(size) => format!("{} ({})", removal.path.display(), format_size(size, BINARY)),
        None => removal.path.display().to_string(),
    }
}

/// `Removed - <path>`, with the freed size appended when it was measured
pub fn removal_line(removal: &Removal) -> String {
    format!("{} {}", REMOVED_PREFIX, removal_detail(removal))
}

pub fn summary_line(summary: &RunSummary) -> String {
    let count = summary.count();
    if count == 0 {
        return "No matching directories found.".to_string();
    }

    let noun = if count == 1 { "directory" } else { "directories" };
    match summary.total_bytes() {
        Some(bytes) => format!(
            "Removed {} {} ({} freed)",
            count,
            noun,
            format_size(bytes, BINARY)
        ),
        None => format!("Removed {} {}", count, noun),
    }
}
