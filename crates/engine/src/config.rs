use derive_builder::Builder;
use std::path::PathBuf;

/// Explicit per-run configuration for the engine; no process-wide state.
#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Already-resolved paths to scan, in order.
    #[builder(default)]
    pub paths: Vec<PathBuf>,

    #[builder(default)]
    pub report_matches: bool,
    #[builder(default)]
    pub report_name_counts: bool,
    #[builder(default)]
    pub report_stats: bool,
}
