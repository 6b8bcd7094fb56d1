//! Airfoil coordinate file loading
//!
//! Airfoil files hold a title line followed by whitespace-separated `x y`
//! pairs running trailing edge to trailing edge, with the leading-edge point
//! written once per surface. Loading reverses the traversal direction and
//! drops the duplicated leading-edge point.

use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{Point2, WingGeometry};
use crate::error::{GridError, Result};

/// Load one airfoil outline
///
/// The outline is returned reversed relative to the file, with the element
/// at `round(len / 2)` removed. Rounding is ties-to-even, so an odd count
/// `2k + 1` with odd `k` drops index `k + 1` rather than the exact middle.
pub fn load_airfoil(path: &Path) -> Result<Vec<Point2>> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => GridError::missing_resource(path),
        _ => GridError::io(path, e),
    })?;

    let mut points = parse_airfoil(&content)
        .map_err(|reason| GridError::malformed(path.display().to_string(), reason))?;

    if points.is_empty() {
        return Err(GridError::malformed(
            path.display().to_string(),
            "airfoil file contains no coordinates",
        ));
    }

    points.reverse();
    let duplicate = leading_edge_index(points.len());
    points.remove(duplicate);

    debug!(
        "Loaded airfoil {}: {} points after removing index {}",
        path.display(),
        points.len(),
        duplicate
    );

    Ok(points)
}

/// Index of the duplicated leading-edge point in a reversed outline
pub fn leading_edge_index(len: usize) -> usize {
    (len as f64 / 2.0).round_ties_even() as usize
}

/// Parse coordinate rows in file order, skipping the title line
fn parse_airfoil(content: &str) -> std::result::Result<Vec<Point2>, String> {
    let mut points = Vec::new();

    for (line_index, line) in content.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let mut values = line.split_whitespace().map(str::parse::<f64>);
        match (values.next(), values.next()) {
            (Some(Ok(x)), Some(Ok(y))) => points.push(Point2::new(x, y)),
            _ => {
                return Err(format!(
                    "line {}: expected 'x y' coordinates, found '{}'",
                    line_index + 1,
                    line.trim()
                ));
            }
        }
    }

    Ok(points)
}

/// Load and attach the outline of every station
///
/// Airfoil file names resolve against `base_dir`, the directory holding the
/// wing geometry file. A station without a file name or whose file is
/// missing aborts the conversion.
pub fn attach_airfoils(geometry: &mut WingGeometry, base_dir: &Path) -> Result<()> {
    for (index, station) in geometry.stations.iter_mut().enumerate() {
        let file_name = station.airfoil_file.as_deref().ok_or_else(|| {
            GridError::malformed(format!("wing station {}", index), "missing Airfoil File Name")
        })?;

        station.outline = load_airfoil(&base_dir.join(file_name))?;
    }

    info!(
        "Attached airfoil outlines to {} stations",
        geometry.stations.len()
    );
    Ok(())
}
