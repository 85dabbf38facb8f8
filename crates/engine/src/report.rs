use crate::scanner::{self, MatchRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::warn;

/// One row of the sorted match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedMatch {
    /// 0-based position in the sorted listing.
    pub rank: usize,
    pub name: String,
    pub path: PathBuf,
    pub line_number: usize,
}

/// All records sharing a case-insensitive name, seen at least twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameGroup {
    /// First-seen casing of the name.
    pub name: String,
    pub count: usize,
    /// `path:line` strings in scan order; always `count` entries.
    pub locations: Vec<String>,
}

/// Per-file and aggregate line statistics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub file_line_counts: BTreeMap<PathBuf, usize>,
    pub file_matched_line_counts: BTreeMap<PathBuf, usize>,
    pub total_line_count: usize,
    pub total_matched_line_count: usize,
}

/// Sort all records by name, case-insensitively, assigning 0-based ranks.
///
/// The sort is stable: records whose names compare equal keep their
/// aggregation order.
pub fn sorted_matches(records: &[MatchRecord]) -> Vec<RankedMatch> {
    let mut sorted: Vec<&MatchRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.name.to_lowercase());

    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, r)| RankedMatch {
            rank,
            name: r.name.clone(),
            path: r.path.clone(),
            line_number: r.line_number,
        })
        .collect()
}

/// Group records by case-insensitive name and keep names occurring at
/// least twice, ordered by count descending, then name ascending.
pub fn duplicate_names(records: &[MatchRecord]) -> Vec<NameGroup> {
    let mut groups: BTreeMap<String, NameGroup> = BTreeMap::new();

    for record in records {
        let key = record.name.to_lowercase();
        let group = groups.entry(key).or_insert_with(|| NameGroup {
            name: record.name.clone(),
            count: 0,
            locations: Vec::new(),
        });
        group.count += 1;
        group
            .locations
            .push(format!("{}:{}", record.path.display(), record.line_number));
    }

    let mut duplicates: Vec<NameGroup> =
        groups.into_values().filter(|g| g.count >= 2).collect();
    duplicates.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    duplicates
}

/// Compute per-file and total line statistics.
///
/// Line counting is best-effort: a path that cannot be counted is logged
/// and left out of the snapshot (and of the totals) instead of failing the
/// run. Matched-line counts come from the already-aggregated records.
pub fn stats(records: &[MatchRecord], paths: &[PathBuf]) -> StatsSnapshot {
    let mut snapshot = StatsSnapshot::default();

    for record in records {
        *snapshot
            .file_matched_line_counts
            .entry(record.path.clone())
            .or_insert(0) += 1;
        snapshot.total_matched_line_count += 1;
    }

    for path in paths {
        match scanner::count_lines(path) {
            Ok(count) => {
                snapshot.file_line_counts.insert(path.clone(), count);
                snapshot.total_line_count += count;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping line count");
            }
        }
    }

    snapshot
}
