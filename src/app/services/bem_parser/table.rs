//! BEM station table parsing
//!
//! The table starts at the sentinel line, which carries the comma-separated
//! column names, and runs until the first blank line.

use tracing::debug;

use super::parse_float_list;
use crate::app::models::MainDataTable;
use crate::error::{GridError, Result};

/// Parse the station table starting at the sentinel line
///
/// `first_line` is the 1-based file line number of `lines[0]`, used in error
/// messages. Returns the table and the number of lines consumed, including
/// the blank line that terminates it.
pub fn parse_table(lines: &[&str], first_line: usize) -> Result<(MainDataTable, usize)> {
    let Some((columns_line, rows)) = lines.split_first() else {
        return Ok((MainDataTable::default(), 0));
    };

    let columns: Vec<String> = columns_line
        .trim()
        .split(',')
        .map(|name| name.trim().to_string())
        .collect();

    let mut table = MainDataTable {
        columns,
        rows: Vec::new(),
    };
    let mut consumed = 1;

    for line in rows {
        consumed += 1;
        if line.trim().is_empty() {
            break;
        }

        let row = parse_float_list(line).ok_or_else(|| {
            GridError::malformed(
                format!("station table line {}", first_line + consumed - 1),
                format!("expected comma-separated numbers, found '{}'", line.trim()),
            )
        })?;
        table.rows.push(row);
    }

    debug!(
        "Parsed station table: {} columns, {} rows",
        table.columns.len(),
        table.rows.len()
    );

    Ok((table, consumed))
}
