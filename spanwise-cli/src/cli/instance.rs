//! Reader for graph instance files.
//!
//! An instance is plain text: the first non-blank line holds the vertex
//! count, and every later non-blank line holds `from to weight` separated by
//! whitespace. Blank lines are skipped. Shape checks beyond the header are
//! left to graph construction.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{Span, debug, field, instrument};

use super::commands::CliError;

/// Reads the instance at `path` into rows of integers.
///
/// # Errors
/// Returns [`CliError::Io`] when the file cannot be opened or read, and
/// [`CliError::Parse`] for tokens that are not integers or a header that is
/// not a single value.
#[instrument(name = "cli.read_instance", err, fields(path = field::Empty, rows = field::Empty))]
pub(crate) fn read_instance(path: &Path) -> Result<Vec<Vec<i64>>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_instance(path, BufReader::new(file))?;
    Span::current().record("rows", rows.len());
    Ok(rows)
}

/// Parses instance text from `reader`; `path` only labels errors.
pub(crate) fn parse_instance<R: BufRead>(path: &Path, reader: R) -> Result<Vec<Vec<i64>>, CliError> {
    let mut rows = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index.saturating_add(1);
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<i64>().map_err(|err| CliError::Parse {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: format!("`{token}` is not an integer: {err}"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() && row.len() != 1 {
            return Err(CliError::Parse {
                path: path.to_path_buf(),
                line: line_number,
                reason: format!("expected a single vertex count, found {} values", row.len()),
            });
        }
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "instance parsed");
    Ok(rows)
}
