use crate::error::{EngineError, Result};
use crate::matcher::HeadingMatcher;
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// One extracted heading occurrence. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub path: PathBuf,
    /// 1-based line number within `path`.
    pub line_number: usize,
    /// Heading text in its original casing, never empty.
    pub name: String,
    /// Count of leading `*` characters.
    pub depth: usize,
}

/// Scan a file line by line and collect heading matches in line order.
///
/// Every line bumps the line counter, blanks included. A trailing line
/// without a final newline still counts.
pub fn scan_file(path: &Path, matcher: &HeadingMatcher) -> Result<Vec<MatchRecord>> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut line_buf = Vec::new();
    let mut line_number = 0usize;

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                line_number += 1;
                // Lossy conversion keeps the scan alive on stray non-UTF8 bytes
                let text = String::from_utf8_lossy(trim_line_ending(&line_buf));
                if let Some(hit) = matcher.match_line(&text) {
                    records.push(MatchRecord {
                        path: path.to_path_buf(),
                        line_number,
                        name: hit.name,
                        depth: hit.depth,
                    });
                }
            }
            Err(e) => {
                return Err(EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    Ok(records)
}

/// Count every line in a file. Independent of matching; zero for an empty
/// file.
pub fn count_lines(path: &Path) -> Result<usize> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut count = 0usize;
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(b'\n', &mut line_buf) {
            Ok(0) => break,
            Ok(_) => count += 1,
            Err(e) => {
                return Err(EngineError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    Ok(count)
}

fn trim_line_ending(raw: &[u8]) -> &[u8] {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    raw.strip_suffix(b"\r").unwrap_or(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn matcher() -> HeadingMatcher {
        HeadingMatcher::new().unwrap()
    }

    fn temp_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn scan_collects_matches_with_line_numbers() {
        let file = temp_with("* Alpha tidbits\n** beta TIDBITS\nnot a heading\n* Alpha tidbits\n");
        let records = scan_file(file.path(), &matcher()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(
            (records[0].depth, records[0].name.as_str(), records[0].line_number),
            (1, "Alpha", 1)
        );
        assert_eq!(
            (records[1].depth, records[1].name.as_str(), records[1].line_number),
            (2, "beta", 2)
        );
        assert_eq!(
            (records[2].depth, records[2].name.as_str(), records[2].line_number),
            (1, "Alpha", 4)
        );
        assert!(records.iter().all(|r| r.path == file.path()));
    }

    #[test]
    fn scan_handles_crlf_endings() {
        let file = temp_with("* Alpha tidbits\r\nplain\r\n");
        let records = scan_file(file.path(), &matcher()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alpha");
    }

    #[test]
    fn scan_of_empty_file_yields_nothing() {
        let file = NamedTempFile::new().unwrap();
        let records = scan_file(file.path(), &matcher()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn scan_missing_file_is_open_error() {
        let err = scan_file(Path::new("/no/such/file.txt"), &matcher()).unwrap_err();
        assert!(matches!(err, EngineError::FileOpen { .. }));
    }

    #[test]
    fn count_lines_counts_blanks() {
        let file = temp_with("one\n\n\nfour\n");
        assert_eq!(count_lines(file.path()).unwrap(), 4);
    }

    #[test]
    fn count_lines_includes_unterminated_tail() {
        let file = temp_with("one\ntwo");
        assert_eq!(count_lines(file.path()).unwrap(), 2);
    }

    #[test]
    fn count_lines_of_empty_file_is_zero() {
        let file = NamedTempFile::new().unwrap();
        assert_eq!(count_lines(file.path()).unwrap(), 0);
    }

    #[test]
    fn count_lines_missing_file_is_open_error() {
        let err = count_lines(Path::new("/no/such/file.txt")).unwrap_err();
        assert!(matches!(err, EngineError::FileOpen { .. }));
    }
}
