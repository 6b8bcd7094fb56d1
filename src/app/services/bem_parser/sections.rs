//! BEM airfoil section parsing
//!
//! Each section opens with a `Section <N> X, Y` marker followed by `x, y`
//! rows up to a blank line. Anything between sections is skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::parse_float_list;
use crate::app::models::{Point2, SectionMap};
use crate::error::{GridError, Result};

static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Section (\d+) X, Y").expect("section pattern is valid")
});

/// Parse every section block in `lines`
///
/// `first_line` is the 1-based file line number of `lines[0]`. Sections are
/// stored by their declared index regardless of file order. Returns the map
/// and the number of lines consumed (always all of them).
pub fn parse_sections(lines: &[&str], first_line: usize) -> Result<(SectionMap, usize)> {
    let mut sections = SectionMap::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let Some(captures) = SECTION_MARKER.captures(lines[cursor]) else {
            cursor += 1;
            continue;
        };

        let index: usize = captures[1].parse().map_err(|_| {
            GridError::malformed(
                format!("line {}", first_line + cursor),
                format!("section index '{}' out of range", &captures[1]),
            )
        })?;
        cursor += 1;

        let mut outline = Vec::new();
        while cursor < lines.len() && !lines[cursor].trim().is_empty() {
            outline.push(parse_point(lines[cursor], first_line + cursor, index)?);
            cursor += 1;
        }

        debug!("Section {}: {} points", index, outline.len());
        if sections.insert(index, outline).is_some() {
            warn!("Section {} appears more than once; keeping the last", index);
        }

        // blank terminator
        cursor += 1;
    }

    Ok((sections, lines.len()))
}

fn parse_point(line: &str, line_number: usize, section: usize) -> Result<Point2> {
    match parse_float_list(line).as_deref() {
        Some([x, y, ..]) => Ok(Point2::new(*x, *y)),
        _ => Err(GridError::malformed(
            format!("section {} line {}", section, line_number),
            format!("expected 'x, y' coordinates, found '{}'", line.trim()),
        )),
    }
}
