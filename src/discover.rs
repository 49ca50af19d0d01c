//! Input file discovery by group label
//!
//! The benchmark harness writes one file per run parameter (thread count,
//! bucket count, ...), e.g. `outputs/output_client_{N}.txt`. A missing file
//! means that configuration was never run: warn and move on.

use std::path::PathBuf;

/// Expand a `{}` pattern for one group label
pub fn group_path(pattern: &str, group: &str) -> PathBuf {
    PathBuf::from(pattern.replacen("{}", group, 1))
}

/// Resolve input files for a list of group labels, skipping missing ones
pub fn discover(pattern: &str, groups: &[String]) -> Vec<(String, PathBuf)> {
    let mut found = Vec::with_capacity(groups.len());
    for group in groups {
        let path = group_path(pattern, group);
        if path.exists() {
            found.push((group.clone(), path));
        } else {
            tracing::warn!(
                "File {} does not exist, skipping group {}",
                path.display(),
                group
            );
        }
    }
    found
}
