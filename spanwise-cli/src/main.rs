//! CLI entry point for spanwise.
//!
//! Parses arguments with clap, runs the command, writes the summary to stdout
//! or the requested file, and maps failures to a non-zero exit code. Logging
//! is initialised first so every later step can emit structured diagnostics.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use spanwise_cli::{
    cli::{Cli, CliError, ExecutionSummary, render_summary, run_cli},
    logging::{self, LoggingError},
};

/// Parse arguments, execute the command, and write its summary.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    match summary.output_path() {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create `{}`", path.display()))?;
            write_summary(&summary, BufWriter::new(file))
        }
        None => write_summary(&summary, BufWriter::new(io::stdout().lock())),
    }
}

fn write_summary(summary: &ExecutionSummary, mut writer: impl Write) -> Result<()> {
    render_summary(summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.and_then(CliError::code).map(field::display);
        let structure_code = cli_error
            .and_then(CliError::structure_code)
            .map(field::display);

        error!(
            error = %format!("{err:#}"),
            code,
            structure_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
