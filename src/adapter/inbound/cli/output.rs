//! Tab-separated result output.

use std::io::{self, Write};

use crate::domain::ResultSet;

/// Line printed between the header and the rows.
pub const SEPARATOR: &str = "--------------------------------";

/// Message printed for an action name that matched nothing.
pub const UNSUPPORTED: &str = "Action not supported";

/// Print `result` as a header line, a separator, then one tab-separated
/// line per row in result order. Prints nothing when no columns were
/// requested. Absent and NULL values print as empty strings.
pub fn render<W: Write>(out: &mut W, result: &ResultSet) -> io::Result<()> {
    let Some(columns) = result.columns() else {
        return Ok(());
    };

    writeln!(out, "{}", columns.join("\t"))?;
    writeln!(out, "{SEPARATOR}")?;
    for row in result.rows() {
        let values: Vec<String> = columns
            .iter()
            .map(|column| row.field(column).unwrap_or_default())
            .collect();
        writeln!(out, "{}", values.join("\t"))?;
    }
    out.flush()
}

/// Report an action name that matched nothing.
pub fn unsupported<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{UNSUPPORTED}")
}

/// Print an error line to stderr.
pub fn error(message: impl std::fmt::Display) {
    eprintln!("error: {message}");
}
