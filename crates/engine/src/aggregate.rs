use crate::error::Result;
use crate::matcher::HeadingMatcher;
use crate::scanner::{self, MatchRecord};
use std::path::PathBuf;

/// Scan every path in order and concatenate the per-file results.
///
/// All matches from `paths[0]` precede all matches from `paths[1]`, and so
/// on; within a file, line order is preserved.
///
/// # Errors
///
/// Fails fast on the first file that cannot be opened or read; no partial
/// collection is returned.
pub fn aggregate(paths: &[PathBuf], matcher: &HeadingMatcher) -> Result<Vec<MatchRecord>> {
    let mut all = Vec::new();
    for path in paths {
        all.extend(scanner::scan_file(path, matcher)?);
    }
    Ok(all)
}
