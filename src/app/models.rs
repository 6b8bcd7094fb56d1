//! Core data structures for geometry conversion.
//!
//! Records produced by the BEM and wing parsers, the points produced by the
//! dimensionalizer, and the section-map invariant checks shared by the
//! conversion pipeline.

use crate::error::{GridError, Result};
use std::collections::BTreeMap;

/// Normalized airfoil outline coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dimensional point in physical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// =============================================================================
// BEM records
// =============================================================================

/// Typed value of a BEM header line
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderValue {
    Int(i64),
    Float(f64),
    List(Vec<f64>),
}

impl HeaderValue {
    /// Numeric view of a scalar value; integers widen to float
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HeaderValue::Int(value) => Some(*value as f64),
            HeaderValue::Float(value) => Some(*value),
            HeaderValue::List(_) => None,
        }
    }
}

/// Key/value pairs collected before the station table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderTable {
    entries: BTreeMap<String, HeaderValue>,
}

impl HeaderTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: HeaderValue) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.entries.get(key)
    }

    /// Look up a scalar as float, accepting integer-typed values
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(HeaderValue::as_f64)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.get(key) {
            Some(HeaderValue::Int(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HeaderValue)> {
        self.entries.iter()
    }
}

/// Radial station table; row `i` belongs to section `i`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MainDataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<f64>>,
}

impl MainDataTable {
    /// Index of the first column whose name starts with `prefix`
    pub fn column_index(&self, prefix: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|name| name.starts_with(prefix))
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Airfoil outlines keyed by section index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionMap {
    sections: BTreeMap<usize, Vec<Point2>>,
}

impl SectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an outline, returning the one it replaced
    pub fn insert(&mut self, index: usize, outline: Vec<Point2>) -> Option<Vec<Point2>> {
        self.sections.insert(index, outline)
    }

    pub fn get(&self, index: usize) -> Option<&[Point2]> {
        self.sections.get(&index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections.keys().copied()
    }

    /// Check the section map against the station table and return the
    /// shared outline length
    ///
    /// Keys must be exactly `0..row_count` and every outline must have the
    /// length of section 0.
    pub fn validate(&self, row_count: usize) -> Result<usize> {
        if row_count == 0 {
            return Err(GridError::inconsistent("station table has no rows"));
        }

        if let Some(missing) = (0..row_count).find(|index| !self.sections.contains_key(index)) {
            return Err(GridError::inconsistent(format!(
                "section {} is missing ({} table rows, {} sections)",
                missing,
                row_count,
                self.sections.len()
            )));
        }

        if let Some(extra) = self.indices().find(|&index| index >= row_count) {
            return Err(GridError::inconsistent(format!(
                "section {} has no matching table row ({} rows)",
                extra, row_count
            )));
        }

        let nodes = self.sections[&0].len();
        for (index, outline) in &self.sections {
            if outline.len() != nodes {
                return Err(GridError::inconsistent(format!(
                    "section {} has {} points, section 0 has {}",
                    index,
                    outline.len(),
                    nodes
                )));
            }
        }

        Ok(nodes)
    }
}

/// Everything read from one BEM file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BemData {
    pub header: HeaderTable,
    pub table: MainDataTable,
    pub sections: SectionMap,
}

impl BemData {
    /// True when the file contained neither a table nor any section
    pub fn is_empty(&self) -> bool {
        self.table.is_empty() && self.sections.is_empty()
    }
}

// =============================================================================
// Wing records
// =============================================================================

/// One spanwise station of a lifting surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WingStation {
    pub airfoil_file: Option<String>,
    pub geom_name: Option<String>,
    pub geom_id: Option<String>,
    pub airfoil_index: Option<i64>,
    pub xsec_flag: Option<i64>,
    pub xsec_index: Option<i64>,
    pub xsec_surf_id: Option<String>,
    pub foil_surf_u: Option<f64>,
    pub global_u: Option<f64>,
    pub leading_edge: Option<[f64; 3]>,
    pub trailing_edge: Option<[f64; 3]>,
    pub chord: Option<f64>,
    /// Normalized outline, attached after parsing
    pub outline: Vec<Point2>,
}

/// Parsed wing geometry file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WingGeometry {
    /// Airfoil directory named in the preamble; informational only
    pub airfoil_directory: Option<String>,
    pub stations: Vec<WingStation>,
}
