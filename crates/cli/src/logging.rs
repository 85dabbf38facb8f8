// crates/cli/src/logging.rs
use crate::options::LogFormat;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing on stderr.
///
/// Each `-v` bumps the default level (warn -> info -> debug -> trace);
/// the `TIDBIT_SCAN_LOG` environment variable overrides the flag entirely.
pub fn init(format: LogFormat, verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_env("TIDBIT_SCAN_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    }
}
