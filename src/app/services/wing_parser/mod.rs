//! Wing geometry parser for multi-station lifting surfaces
//!
//! A wing file is a preamble followed by station chunks, each chunk
//! separated by a line of 40 `#` characters and holding `<Label>, <value>`
//! lines.
//!
//! - [`fields`] - the declarative field grammar applied to each chunk
//! - [`parser`] - file reading, chunk splitting and station assembly
//!
//! Parsing is permissive: a chunk missing fields still yields a station, and
//! missing geometry is reported only when the station is dimensionalized.

pub mod fields;
pub mod parser;

#[cfg(test)]
pub mod tests;

pub use fields::{FieldKind, FieldValue, WING_FIELDS, WingField};
pub use parser::WingParser;
