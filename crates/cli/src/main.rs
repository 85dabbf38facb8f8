use clap::Parser;
use std::process::ExitCode;
use tidbit_scan_cli::args::Args;
use tidbit_scan_cli::error::Result;
use tidbit_scan_cli::{config, filesystem, logging, presentation};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.log_format, args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let paths = filesystem::resolve_paths(&args.paths)?;
    filesystem::ensure_text_files(&paths)?;

    let config = config::config_from_args(args, paths);
    let reports = tidbit_scan_engine::run(&config)?;

    presentation::print_reports(&reports, args.format)
}
