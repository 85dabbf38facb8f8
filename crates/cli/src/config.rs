// crates/cli/src/config.rs
use crate::args::Args;
use std::path::PathBuf;
use tidbit_scan_engine::config::{Config, ConfigBuilder};

/// Build the engine config from parsed args and already-resolved paths.
pub fn config_from_args(args: &Args, resolved_paths: Vec<PathBuf>) -> Config {
    ConfigBuilder::default()
        .paths(resolved_paths)
        .report_matches(args.report_matches)
        .report_name_counts(args.report_name_counts)
        .report_stats(args.report_stats)
        .build()
        .expect("Failed to build config")
}
