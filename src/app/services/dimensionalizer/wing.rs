//! Wing station placement
//!
//! Wing stations carry their own leading and trailing edge points. The
//! outline is scaled by chord into the (x, z) plane of the geometry file,
//! twisted about the leading edge, and placed at the leading edge's y.

use super::twist::{rotate, twist_angle};
use crate::app::models::{Point3, WingStation};
use crate::error::{GridError, Result};

fn required<T: Copy>(value: Option<T>, index: usize, field: &str) -> Result<T> {
    value.ok_or_else(|| {
        GridError::malformed(format!("wing station {}", index), format!("missing {}", field))
    })
}

/// Dimensionalize one wing station in geometry-file axes
///
/// Returned points are `(X, Y, Z)` with the chord plane in `(X, Y)` and the
/// span in `Z`. Fails if the station lacks a leading edge, trailing edge,
/// chord, or outline.
pub fn dimensionalize_station(station: &WingStation, index: usize) -> Result<Vec<Point3>> {
    let le = required(station.leading_edge, index, "Leading Edge Point")?;
    let te = required(station.trailing_edge, index, "Trailing Edge Point")?;
    let chord = required(station.chord, index, "Chord")?;
    if station.outline.is_empty() {
        return Err(GridError::malformed(
            format!("wing station {}", index),
            "airfoil outline is empty",
        ));
    }

    let twist = twist_angle(le, te);

    Ok(station
        .outline
        .iter()
        .map(|point| {
            let x = le[0] + point.x * chord;
            let y = le[2] + point.y * chord;
            let z = le[1];

            let (dx, dy) = rotate(x - le[0], y - le[2], twist);
            Point3::new(dx + le[0], dy + le[2], z)
        })
        .collect())
}

/// Map a geometry-file point into grid axes
///
/// The grid's y axis is the span, negated; its z axis is the chord-plane
/// thickness direction.
pub fn to_grid_axes(point: Point3) -> Point3 {
    Point3::new(point.x, -point.z, point.y)
}
