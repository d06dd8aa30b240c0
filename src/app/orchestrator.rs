//! Main application orchestrator.
//!
//! Coordinates one run of the tool:
//! 1. Initializes verbose logging when requested.
//! 2. Reads the edge list from a file or stdin.
//! 3. Delegates graph building, enumeration and ranking to `processing`.
//! 4. Prints the ranked table to stdout.
//!
//! Output is written only after the whole pipeline succeeded, so a failing
//! run leaves stdout empty.

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::path;
use std::io::{self, BufWriter, Write};

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the input cannot be read, does not parse, names an
/// unknown endpoint, or if writing the table to stdout fails.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let verbose = cli.verbose;

    if verbose {
        if let Err(e) = logger::init_global_logger(cli.log_file.as_deref()) {
            // Logging is optional; carry on without it.
            eprintln!(
                "Warning: Failed to initialize verbose logger: {}. Verbose output will be unavailable.",
                e
            );
        }
    }

    let result = run_pipeline(&cli, verbose);
    if let Err(e) = &result {
        verbose_eprintln!(verbose, "{}", e);
    }

    if verbose {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!("[WARNING] Failed to perform final flush of verbose log: {}", e);
        }
    }
    result
}

fn run_pipeline(cli: &Cli, verbose: bool) -> Result<(), AppError> {
    verbose_println!(
        verbose,
        "============================================================"
    );
    let data = file_handler::read_input(&cli.input, verbose)?;

    let report = processing::rank_edge_list(&data, cli.start, cli.end, verbose)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    path::write_table(&mut writer, &report.ranked)?;
    writer.flush()?;

    verbose_println!(
        verbose,
        "[DONE] Wrote {} row(s) for {} -> {}.",
        report.ranked.len(),
        report.start,
        report.end
    );
    Ok(())
}
