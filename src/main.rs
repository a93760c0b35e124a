use anyhow::Context;
use clap::Parser;
use lineage::cli::{self, Args};
use lineage::core::{DefaultErrorReporter, ErrorReporter, LineageError};
use lineage::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match logging::init(&args.command).context("failed to initialize logging") {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("[ERROR] {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<LineageError>() {
                Some(lineage_error) => DefaultErrorReporter::new().report_error(lineage_error),
                None => {
                    tracing::error!("{:#}", err);
                    eprintln!("[ERROR] {:#}", err);
                }
            }
            ExitCode::FAILURE
        }
    }
}
