// crates/cli/src/filesystem.rs
use crate::error::{AppError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Bytes inspected when deciding whether a file is plain text.
const SNIFF_LEN: u64 = 8192;

/// Expand a leading `~` or `~/` using the current user's home directory.
/// `~user` forms and paths without a tilde are returned unchanged.
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(s) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    if s == "~" {
        return home_dir();
    }
    if let Some(rest) = s.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(path.to_path_buf())
}

/// Expand every input path, failing on the first one that cannot be
/// resolved.
pub fn resolve_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    paths
        .iter()
        .map(|p| {
            let expanded = expand_tilde(p)?;
            if expanded != *p {
                debug!(raw = %p.display(), expanded = %expanded.display(), "expanded path");
            }
            Ok(expanded)
        })
        .collect()
}

/// Reject inputs that do not look like plain text before scanning starts.
///
/// A NUL byte or an invalid UTF-8 sequence in the leading bytes
/// disqualifies the file. An unreadable file fails here too, so the run
/// aborts before any report is produced.
pub fn ensure_text_files(paths: &[PathBuf]) -> Result<()> {
    for path in paths {
        ensure_text_file(path)?;
    }
    Ok(())
}

fn ensure_text_file(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|source| AppError::Sniff {
        path: path.to_path_buf(),
        source,
    })?;

    let mut sample = Vec::with_capacity(SNIFF_LEN as usize);
    file.take(SNIFF_LEN)
        .read_to_end(&mut sample)
        .map_err(|source| AppError::Sniff {
            path: path.to_path_buf(),
            source,
        })?;

    if sample.contains(&0) || !sample_is_utf8(&sample) {
        return Err(AppError::NotText {
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

fn sample_is_utf8(sample: &[u8]) -> bool {
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        // error_len() == None means the sample ends mid-sequence, which a
        // truncated read of a valid file can legitimately do
        Err(e) => e.error_len().is_none(),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| AppError::PathResolution("home directory is not known".to_string()))
}
