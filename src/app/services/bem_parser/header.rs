//! BEM header block parsing
//!
//! The header is a run of `<Key>: <value>` lines ending at the station
//! table sentinel. Lines that do not match the key/value shape are ignored.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::app::models::{HeaderTable, HeaderValue};
use crate::constants::BEM_TABLE_SENTINEL;

static HEADER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w[\w\s/]*): ([\d.\-\s,]+)").expect("header pattern is valid")
});

/// Classify a raw header value by its syntax
///
/// Precedence: a comma makes a list of floats, otherwise a decimal point
/// makes a float, otherwise the value is an integer. Returns `None` when the
/// value does not parse as the selected type.
pub fn classify_value(raw: &str) -> Option<HeaderValue> {
    let value = raw.trim();

    if value.contains(',') {
        value
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()
            .map(HeaderValue::List)
    } else if value.contains('.') {
        value.parse::<f64>().ok().map(HeaderValue::Float)
    } else {
        value.parse::<i64>().ok().map(HeaderValue::Int)
    }
}

/// Collect header entries up to the table sentinel
///
/// Returns the header and the number of lines consumed. The sentinel line
/// itself is not consumed; it belongs to the table stage. Without a sentinel
/// every line is consumed.
pub fn parse_header(lines: &[&str]) -> (HeaderTable, usize) {
    let mut header = HeaderTable::new();

    for (index, line) in lines.iter().enumerate() {
        if line.starts_with(BEM_TABLE_SENTINEL) {
            debug!("Header ends at line {} with {} entries", index + 1, header.len());
            return (header, index);
        }

        let Some(captures) = HEADER_LINE.captures(line) else {
            continue;
        };

        let key = captures[1].trim();
        match classify_value(&captures[2]) {
            Some(value) => header.insert(key, value),
            None => warn!(
                "Skipping header line {}: cannot parse value for '{}'",
                index + 1,
                key
            ),
        }
    }

    debug!("No table sentinel found; header has {} entries", header.len());
    (header, lines.len())
}
