//! Command-line interface orchestration for spanwise.
//!
//! `run` reads instance files, runs the selected spanning tree strategies on
//! each, and reports cost and timing per run; `list` prints the strategy
//! names `run` accepts.

mod commands;
mod instance;
mod report;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
pub use report::{REPORT_COLUMNS, Report, ReportRow};
