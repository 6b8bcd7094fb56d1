//! Rotor blade section placement
//!
//! Table rows become [`RotorStation`]s scaled by the rotor radius. How a
//! station's outline is placed depends on whether the table carries a twist
//! column; [`select_strategy`] picks the matching [`RotorDimensionalizer`].

use tracing::{debug, info};

use super::twist::rotate;
use crate::app::models::{BemData, MainDataTable, Point2, Point3};
use crate::app::services::grid_writer::Traversal;
use crate::config::ConverterConfig;
use crate::constants::bem_columns;
use crate::error::{GridError, Result};

/// Table columns holding the station quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub radius: usize,
    pub chord: usize,
    pub twist: Option<usize>,
}

impl ColumnLayout {
    /// Locate columns by header prefix; radius and chord fall back to their
    /// usual positions
    pub fn resolve(table: &MainDataTable, config: &ConverterConfig) -> Self {
        let layout = Self {
            radius: table
                .column_index(&config.radius_column)
                .unwrap_or(bem_columns::RADIUS_INDEX),
            chord: table
                .column_index(&config.chord_column)
                .unwrap_or(bem_columns::CHORD_INDEX),
            twist: table.column_index(&config.twist_column),
        };
        debug!("Resolved BEM column layout: {:?}", layout);
        layout
    }
}

/// Dimensional placement of one radial station
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotorStation {
    /// Radial position in physical units
    pub radius: f64,
    /// Chord length in physical units
    pub chord: f64,
    /// Twist in radians, zero without a twist column
    pub twist_rad: f64,
}

/// Build one station per table row using `Diameter / 2` as the scale
pub fn build_stations(
    data: &BemData,
    layout: &ColumnLayout,
    config: &ConverterConfig,
) -> Result<Vec<RotorStation>> {
    let diameter = data.header.get_float(&config.diameter_key).ok_or_else(|| {
        GridError::malformed(
            "BEM header",
            format!("missing numeric '{}' entry", config.diameter_key),
        )
    })?;
    let rotor_radius = diameter / 2.0;

    data.table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let column = |position: usize| {
                row.get(position).copied().ok_or_else(|| {
                    GridError::malformed(
                        format!("station table row {}", index),
                        format!("row has {} values, column {} needed", row.len(), position),
                    )
                })
            };

            let twist_rad = match layout.twist {
                Some(position) => column(position)?.to_radians(),
                None => 0.0,
            };

            Ok(RotorStation {
                radius: column(layout.radius)? * rotor_radius,
                chord: column(layout.chord)? * rotor_radius,
                twist_rad,
            })
        })
        .collect()
}

/// Placement of a normalized outline at a rotor station
pub trait RotorDimensionalizer {
    /// Short name for logs and summaries
    fn name(&self) -> &'static str;

    /// Station order expected in the grid file
    fn traversal(&self) -> Traversal;

    /// Map every outline point to physical coordinates
    fn dimensionalize(&self, station: &RotorStation, outline: &[Point2]) -> Vec<Point3>;
}

/// Untwisted placement: chord plane is (x, y), radius along z
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRotor;

impl RotorDimensionalizer for PlainRotor {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn traversal(&self) -> Traversal {
        Traversal::Forward
    }

    fn dimensionalize(&self, station: &RotorStation, outline: &[Point2]) -> Vec<Point3> {
        outline
            .iter()
            .map(|point| {
                Point3::new(
                    point.x * station.chord,
                    point.y * station.chord,
                    station.radius,
                )
            })
            .collect()
    }
}

/// Twisted placement: chord plane is (x, z) centred at mid-chord, span
/// along negative y, twist applied about the origin of that plane
#[derive(Debug, Default, Clone, Copy)]
pub struct TwistedRotor;

impl RotorDimensionalizer for TwistedRotor {
    fn name(&self) -> &'static str {
        "twisted"
    }

    fn traversal(&self) -> Traversal {
        Traversal::Reverse
    }

    fn dimensionalize(&self, station: &RotorStation, outline: &[Point2]) -> Vec<Point3> {
        let leading_edge = [-0.5 * station.chord, -station.radius, 0.0];

        outline
            .iter()
            .map(|point| {
                let x = leading_edge[0] + point.x * station.chord;
                let y = leading_edge[1];
                let z = leading_edge[2] + point.y * station.chord;

                let (x, z) = rotate(x, z, station.twist_rad);
                Point3::new(x, y, z)
            })
            .collect()
    }
}

/// Pick the placement strategy from the table layout
pub fn select_strategy(layout: &ColumnLayout) -> Box<dyn RotorDimensionalizer> {
    let strategy: Box<dyn RotorDimensionalizer> = match layout.twist {
        Some(_) => Box::new(TwistedRotor),
        None => Box::new(PlainRotor),
    };
    info!("Using {} rotor placement", strategy.name());
    strategy
}
