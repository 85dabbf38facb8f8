// crates/engine/src/lib.rs
pub mod aggregate;
pub mod config;
pub mod error;
pub mod matcher;
pub mod report;
pub mod scanner;

use crate::config::Config;
use crate::error::Result;
use crate::matcher::HeadingMatcher;
use crate::report::{NameGroup, RankedMatch, StatsSnapshot};
use serde::Serialize;

/// Reports produced by one run; a report is `None` when not requested.
#[derive(Debug, Clone, Serialize)]
pub struct RunReports {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matches: Option<Vec<RankedMatch>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_counts: Option<Vec<NameGroup>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsSnapshot>,
}

/// Scan `config.paths` for headings and build the requested reports.
///
/// # Errors
///
/// Any open or read failure during the matching pass aborts the whole run;
/// no reports are produced. Line-count failures in the statistics pass are
/// logged and the path skipped instead.
pub fn run(config: &Config) -> Result<RunReports> {
    let matcher = HeadingMatcher::new()?;
    let records = aggregate::aggregate(&config.paths, &matcher)?;

    Ok(RunReports {
        matches: config
            .report_matches
            .then(|| report::sorted_matches(&records)),
        name_counts: config
            .report_name_counts
            .then(|| report::duplicate_names(&records)),
        stats: config
            .report_stats
            .then(|| report::stats(&records, &config.paths)),
    })
}
