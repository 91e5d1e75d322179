//! Command implementations and argument parsing for the spanwise CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use spanwise_core::{Algorithm, Graph, GraphError, MstError, minimum_spanning_cost};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::instance::read_instance;
use super::report::{Report, ReportRow};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "spanwise",
    about = "Compute minimum spanning tree weights with interchangeable strategies."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run algorithms over instance files and print a delimited report.
    Run(RunCommand),
    /// Print the supported algorithm names.
    List,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Instance files to process, in order.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Algorithm to run; repeat to select several. Defaults to all of them.
    #[arg(long = "algorithm", short = 'a')]
    pub algorithms: Vec<Algorithm>,

    /// Keep each edge with this probability (in percent) before running.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub sample_percent: Option<u8>,

    /// Seed for edge sampling; drawn from the OS when omitted.
    #[arg(long, requires = "sample_percent")]
    pub seed: Option<u64>,

    /// Write the report here instead of stdout.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Field separator for the report.
    #[arg(long, default_value_t = ',')]
    pub delimiter: char,
}

impl RunCommand {
    /// The selected algorithms, or all six when none were named.
    #[must_use]
    pub fn selected_algorithms(&self) -> Vec<Algorithm> {
        if self.algorithms.is_empty() {
            Algorithm::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An instance file could not be opened or read.
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// An instance file held text that is not a valid row.
    #[error("{}:{line}: {reason}", path.display())]
    Parse {
        /// Path of the instance file.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The rows did not describe a valid graph.
    #[error("invalid graph in `{}`: {source}", path.display())]
    Graph {
        /// Path of the instance file.
        path: PathBuf,
        /// Construction failure.
        #[source]
        source: GraphError,
    },
    /// An algorithm failed on a graph.
    #[error("{algorithm} failed on `{}`: {source}", path.display())]
    Mst {
        /// Path of the instance file.
        path: PathBuf,
        /// Strategy that failed.
        algorithm: Algorithm,
        /// Algorithm failure.
        #[source]
        source: MstError,
    },
}

impl CliError {
    /// Stable code of the underlying library error, if there is one.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph { source, .. } => Some(source.code().as_str()),
            Self::Mst { source, .. } => Some(source.code().as_str()),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }

    /// Stable code of the data structure failure behind an algorithm error.
    #[must_use]
    pub fn structure_code(&self) -> Option<&'static str> {
        match self {
            Self::Mst { source, .. } => source.structure_code().map(|code| code.as_str()),
            _ => None,
        }
    }
}

/// Result of a CLI command, ready to render.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Measurements from `run`.
    Report {
        /// Rows and delimiter to print.
        report: Report,
        /// Destination file; stdout when `None`.
        output: Option<PathBuf>,
    },
    /// Names from `list`.
    Algorithms(Vec<Algorithm>),
}

impl ExecutionSummary {
    /// File the summary should be written to, if not stdout.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Report { output, .. } => output.as_deref(),
            Self::Algorithms(_) => None,
        }
    }
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when an instance cannot be read or parsed, a graph
/// is invalid, or an algorithm fails. The first failure aborts the run.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use spanwise_cli::cli::{Cli, Command, ExecutionSummary, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n1 2 1\n2 3 2\n1 3 3\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         paths: vec![file.path().to_path_buf()],
///         algorithms: vec!["kruskal-tree-heap-sort".parse()?],
///         sample_percent: None,
///         seed: None,
///         output: None,
///         delimiter: ',',
///     }),
/// };
/// let ExecutionSummary::Report { report, .. } = run_cli(cli)? else {
///     unreachable!("run produces a report");
/// };
/// assert_eq!(report.rows[0].cost, 3);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            let output = run.output.clone();
            let report = run_command(run)?;
            Ok(ExecutionSummary::Report { report, output })
        }
        Command::List => {
            Span::current().record("command", field::display("list"));
            Ok(ExecutionSummary::Algorithms(Algorithm::ALL.to_vec()))
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        inputs = command.paths.len(),
        algorithms = field::Empty,
        sample_percent = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<Report, CliError> {
    let algorithms = command.selected_algorithms();
    let span = Span::current();
    span.record("algorithms", algorithms.len());
    if let Some(percent) = command.sample_percent {
        span.record("sample_percent", percent);
    }

    let mut rng = match command.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut rows = Vec::with_capacity(command.paths.len().saturating_mul(algorithms.len()));
    for path in &command.paths {
        let graph = load_graph(path, command.sample_percent, &mut rng)?;
        for &algorithm in &algorithms {
            rows.push(measure(path, &graph, algorithm)?);
        }
    }

    info!(rows = rows.len(), "run completed");
    Ok(Report {
        delimiter: command.delimiter,
        rows,
    })
}

pub(super) fn load_graph(
    path: &Path,
    sample_percent: Option<u8>,
    rng: &mut SmallRng,
) -> Result<Graph, CliError> {
    let rows = read_instance(path)?;
    let graph = match sample_percent {
        Some(percent) => Graph::from_rows_sampled(&rows, percent, rng),
        None => Graph::from_rows(&rows),
    };
    graph.map_err(|source| CliError::Graph {
        path: path.to_path_buf(),
        source,
    })
}

fn measure(path: &Path, graph: &Graph, algorithm: Algorithm) -> Result<ReportRow, CliError> {
    let started = Instant::now();
    let cost = minimum_spanning_cost(graph, algorithm).map_err(|source| CliError::Mst {
        path: path.to_path_buf(),
        algorithm,
        source,
    })?;
    let elapsed = started.elapsed();
    info!(
        input = %path.display(),
        %algorithm,
        cost,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "algorithm completed"
    );
    Ok(ReportRow {
        input: path.display().to_string(),
        algorithm,
        cost,
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        elapsed,
    })
}

/// Renders `summary` to `writer`: the delimited report for `run`, one name
/// per line for `list`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Report { report, .. } => report.write_to(writer),
        ExecutionSummary::Algorithms(algorithms) => {
            for algorithm in algorithms {
                writeln!(writer, "{algorithm}")?;
            }
            Ok(())
        }
    }
}
