//! Delimited report of per-run measurements.

use std::io::{self, Write};
use std::time::Duration;

use spanwise_core::Algorithm;

/// Column names, in output order.
pub const REPORT_COLUMNS: [&str; 6] = ["input", "algorithm", "cost", "vertices", "edges", "elapsed_us"];

/// One algorithm run on one input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportRow {
    /// Input label, usually the instance path.
    pub input: String,
    /// Strategy that produced the cost.
    pub algorithm: Algorithm,
    /// Minimum spanning tree weight.
    pub cost: i64,
    /// Vertices the tree spans.
    pub vertices: usize,
    /// Edges in the graph.
    pub edges: usize,
    /// Wall-clock time spent in the algorithm.
    pub elapsed: Duration,
}

/// A header plus one row per run, joined by `delimiter`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Report {
    /// Field separator.
    pub delimiter: char,
    /// Rows in execution order.
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Writes the header and every row to `writer`.
    ///
    /// Fields that would split a column are quoted so each row keeps one
    /// value per column.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing fails.
    ///
    /// # Examples
    /// ```
    /// use std::time::Duration;
    /// use spanwise_cli::cli::{Report, ReportRow};
    ///
    /// let report = Report {
    ///     delimiter: ',',
    ///     rows: vec![ReportRow {
    ///         input: "triangle.txt".into(),
    ///         algorithm: "prim-edge".parse()?,
    ///         cost: 3,
    ///         vertices: 3,
    ///         edges: 3,
    ///         elapsed: Duration::from_micros(12),
    ///     }],
    /// };
    /// let mut buffer = Vec::new();
    /// report.write_to(&mut buffer)?;
    /// assert_eq!(
    ///     String::from_utf8(buffer)?,
    ///     "input,algorithm,cost,vertices,edges,elapsed_us\ntriangle.txt,prim-edge,3,3,3,12\n",
    /// );
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        let separator = self.delimiter.to_string();
        writeln!(writer, "{}", REPORT_COLUMNS.join(&separator))?;
        for row in &self.rows {
            let fields = [
                row.input.clone(),
                row.algorithm.to_string(),
                row.cost.to_string(),
                row.vertices.to_string(),
                row.edges.to_string(),
                row.elapsed.as_micros().to_string(),
            ];
            let quoted: Vec<String> = fields
                .iter()
                .map(|field| quote_field(field, self.delimiter))
                .collect();
            writeln!(writer, "{}", quoted.join(&separator))?;
        }
        Ok(())
    }
}

/// Quotes `field` when it holds the delimiter or a quote or line break,
/// doubling inner quotes.
fn quote_field(field: &str, delimiter: char) -> String {
    let needs_quotes = field
        .chars()
        .any(|ch| ch == delimiter || matches!(ch, '"' | '\n' | '\r'));
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
