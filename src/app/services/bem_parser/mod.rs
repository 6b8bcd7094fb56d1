//! BEM file parser for rotor blade definitions
//!
//! A BEM file has three consecutive parts, each handled by its own stage:
//! - [`header`] - `<Key>: <value>` lines up to the `Radius/R` sentinel
//! - [`table`] - the sentinel's column names and one numeric row per station
//! - [`sections`] - `Section <N> X, Y` blocks of normalized airfoil points
//!
//! [`parser`] ties them together. Each stage takes the remaining lines and
//! reports how many it consumed, so no scan state is shared between them.
//!
//! ## Usage
//!
//! ```rust
//! use bladegrid::app::services::bem_parser::BemParser;
//!
//! let text = "Diameter: 2.0\nRadius/R, Chord/R\n0.5, 0.1\n\nSection 0 X, Y\n0.0, 0.0\n1.0, 0.0\n";
//! let data = BemParser::new().parse_str(text).unwrap();
//! assert_eq!(data.header.get_float("Diameter"), Some(2.0));
//! assert_eq!(data.table.row_count(), 1);
//! assert_eq!(data.sections.get(0).map(|s| s.len()), Some(2));
//! ```

pub mod header;
pub mod parser;
pub mod sections;
pub mod table;

#[cfg(test)]
pub mod tests;

pub use header::classify_value;
pub use parser::BemParser;

/// Parse a comma-separated list of floats, `None` if any entry is invalid
pub(crate) fn parse_float_list(line: &str) -> Option<Vec<f64>> {
    line.trim()
        .split(',')
        .map(|value| value.trim().parse::<f64>().ok())
        .collect()
}
