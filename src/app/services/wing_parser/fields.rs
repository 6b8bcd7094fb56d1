//! Declarative field grammar for wing station chunks
//!
//! Every recognised field is one row of [`WING_FIELDS`]: the field it fills,
//! its label in the file, and the kind of value that follows the label. The
//! kind decides both the regex suffix and how the capture is converted, so
//! adding a field is a one-line change to the table.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::app::models::WingStation;
use crate::constants::wing_labels;

/// Fields recognised in a station chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WingField {
    AirfoilFileName,
    GeomName,
    GeomId,
    AirfoilIndex,
    XSecFlag,
    XSecIndex,
    XSecSurfId,
    FoilSurfU,
    GlobalU,
    LeadingEdge,
    TrailingEdge,
    Chord,
}

/// Shape of the value following a field label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Rest of the line, trimmed
    Text,
    /// Unsigned integer
    Integer,
    /// Unsigned decimal number
    Float,
    /// Three comma-separated signed decimals
    Triple,
}

impl FieldKind {
    fn value_pattern(&self) -> &'static str {
        match self {
            FieldKind::Text => r"(.+)",
            FieldKind::Integer => r"(\d+)",
            FieldKind::Float => r"([\d.]+)",
            FieldKind::Triple => r"([\d.\-]+),\s*([\d.\-]+),\s*([\d.\-]+)",
        }
    }

    fn extract(&self, captures: &Captures<'_>) -> Option<FieldValue> {
        match self {
            FieldKind::Text => Some(FieldValue::Text(captures[1].trim().to_string())),
            FieldKind::Integer => captures[1].parse().ok().map(FieldValue::Integer),
            FieldKind::Float => captures[1].parse().ok().map(FieldValue::Float),
            FieldKind::Triple => {
                let x = captures[1].parse().ok()?;
                let y = captures[2].parse().ok()?;
                let z = captures[3].parse().ok()?;
                Some(FieldValue::Triple([x, y, z]))
            }
        }
    }
}

/// Converted field value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Triple([f64; 3]),
}

/// One grammar rule
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: WingField,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn rule(field: WingField, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { field, label, kind }
}

/// Field grammar applied to every station chunk
pub const WING_FIELDS: &[FieldSpec] = &[
    rule(WingField::AirfoilFileName, wing_labels::AIRFOIL_FILE_NAME, FieldKind::Text),
    rule(WingField::GeomName, wing_labels::GEOM_NAME, FieldKind::Text),
    rule(WingField::GeomId, wing_labels::GEOM_ID, FieldKind::Text),
    rule(WingField::AirfoilIndex, wing_labels::AIRFOIL_INDEX, FieldKind::Integer),
    rule(WingField::XSecFlag, wing_labels::XSEC_FLAG, FieldKind::Integer),
    rule(WingField::XSecIndex, wing_labels::XSEC_INDEX, FieldKind::Integer),
    rule(WingField::XSecSurfId, wing_labels::XSEC_SURF_ID, FieldKind::Text),
    rule(WingField::FoilSurfU, wing_labels::FOIL_SURF_U, FieldKind::Float),
    rule(WingField::GlobalU, wing_labels::GLOBAL_U, FieldKind::Float),
    rule(WingField::LeadingEdge, wing_labels::LEADING_EDGE, FieldKind::Triple),
    rule(WingField::TrailingEdge, wing_labels::TRAILING_EDGE, FieldKind::Triple),
    rule(WingField::Chord, wing_labels::CHORD, FieldKind::Float),
];

static COMPILED_FIELDS: LazyLock<Vec<(FieldSpec, Regex)>> = LazyLock::new(|| {
    WING_FIELDS
        .iter()
        .map(|spec| {
            let pattern = format!(
                r"{},\s*{}",
                regex::escape(spec.label),
                spec.kind.value_pattern()
            );
            let regex = Regex::new(&pattern).expect("wing field pattern is valid");
            (*spec, regex)
        })
        .collect()
});

/// Result of matching one rule against a chunk
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatch {
    /// Label found and value converted
    Parsed(WingField, FieldValue),
    /// Label found but the captured text did not convert
    Unparsed(WingField, String),
}

/// Search a chunk for every field in the grammar
///
/// Only the first occurrence of each label counts. Fields absent from the
/// chunk produce no entry.
pub fn scan_chunk(chunk: &str) -> Vec<FieldMatch> {
    COMPILED_FIELDS
        .iter()
        .filter_map(|(spec, regex)| {
            let captures = regex.captures(chunk)?;
            Some(match spec.kind.extract(&captures) {
                Some(value) => FieldMatch::Parsed(spec.field, value),
                None => FieldMatch::Unparsed(spec.field, captures[0].to_string()),
            })
        })
        .collect()
}

impl WingStation {
    /// Store a converted field value; a value of the wrong kind is ignored
    pub fn apply(&mut self, field: WingField, value: FieldValue) {
        match (field, value) {
            (WingField::AirfoilFileName, FieldValue::Text(v)) => self.airfoil_file = Some(v),
            (WingField::GeomName, FieldValue::Text(v)) => self.geom_name = Some(v),
            (WingField::GeomId, FieldValue::Text(v)) => self.geom_id = Some(v),
            (WingField::XSecSurfId, FieldValue::Text(v)) => self.xsec_surf_id = Some(v),
            (WingField::AirfoilIndex, FieldValue::Integer(v)) => self.airfoil_index = Some(v),
            (WingField::XSecFlag, FieldValue::Integer(v)) => self.xsec_flag = Some(v),
            (WingField::XSecIndex, FieldValue::Integer(v)) => self.xsec_index = Some(v),
            (WingField::FoilSurfU, FieldValue::Float(v)) => self.foil_surf_u = Some(v),
            (WingField::GlobalU, FieldValue::Float(v)) => self.global_u = Some(v),
            (WingField::Chord, FieldValue::Float(v)) => self.chord = Some(v),
            (WingField::LeadingEdge, FieldValue::Triple(v)) => self.leading_edge = Some(v),
            (WingField::TrailingEdge, FieldValue::Triple(v)) => self.trailing_edge = Some(v),
            _ => {}
        }
    }
}
