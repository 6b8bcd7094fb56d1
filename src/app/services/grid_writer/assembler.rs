//! Structured grid assembly
//!
//! Orders per-station point arrays into a single-block surface grid with the
//! chordwise index varying fastest, optionally mirroring non-root stations
//! across a symmetry plane.

use tracing::debug;

use crate::app::models::Point3;
use crate::config::Axis;
use crate::error::{GridError, Result};

/// Order in which stations are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Parse order, first station first
    Forward,
    /// Last-parsed station first
    Reverse,
}

/// Single-block structured surface grid (`nz = 1`)
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredGrid {
    nx: usize,
    ny: usize,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl StructuredGrid {
    /// Build a grid from flattened coordinate arrays
    pub fn new(nx: usize, ny: usize, x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> Result<Self> {
        let expected = nx * ny;
        if x.len() != expected || y.len() != expected || z.len() != expected {
            return Err(GridError::inconsistent(format!(
                "grid {}x{} needs {} values per axis, got x={}, y={}, z={}",
                nx,
                ny,
                expected,
                x.len(),
                y.len(),
                z.len()
            )));
        }
        Ok(Self { nx, ny, x, y, z })
    }

    /// Assemble stations into a grid
    ///
    /// `stations` are in parse order; station 0 is the root and sets `nx`.
    /// Stations are emitted in `traversal` order. With `mirror`, stations
    /// `1..N` are then emitted again in parse order with the `mirror`
    /// coordinate negated, giving `ny = 2N - 1`.
    pub fn assemble(
        stations: &[Vec<Point3>],
        traversal: Traversal,
        mirror: Option<Axis>,
    ) -> Result<Self> {
        let reference = stations
            .first()
            .ok_or_else(|| GridError::inconsistent("no stations to assemble"))?;
        let nx = reference.len();
        if nx == 0 {
            return Err(GridError::inconsistent("station 0 has no points"));
        }

        for (index, station) in stations.iter().enumerate() {
            if station.len() != nx {
                return Err(GridError::inconsistent(format!(
                    "station {} has {} points, station 0 has {}",
                    index,
                    station.len(),
                    nx
                )));
            }
        }

        let primary: Vec<&Vec<Point3>> = match traversal {
            Traversal::Forward => stations.iter().collect(),
            Traversal::Reverse => stations.iter().rev().collect(),
        };

        let mut ordered: Vec<Point3> = primary.into_iter().flatten().copied().collect();
        if let Some(axis) = mirror {
            ordered.extend(
                stations[1..]
                    .iter()
                    .flatten()
                    .map(|point| mirror_point(*point, axis)),
            );
        }

        let ny = ordered.len() / nx;
        debug!(
            "Assembled grid {}x{} from {} stations (mirror: {:?})",
            nx,
            ny,
            stations.len(),
            mirror
        );

        Self::new(
            nx,
            ny,
            ordered.iter().map(|p| p.x).collect(),
            ordered.iter().map(|p| p.y).collect(),
            ordered.iter().map(|p| p.z).collect(),
        )
    }

    pub fn nx(&self) -> usize {
        self.nx
    }

    pub fn ny(&self) -> usize {
        self.ny
    }

    pub fn nz(&self) -> usize {
        crate::constants::GRID_NODES_DIRZ
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn z(&self) -> &[f64] {
        &self.z
    }

    /// Point at chordwise index `i` and station row `j`
    pub fn point(&self, i: usize, j: usize) -> Option<Point3> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        let k = j * self.nx + i;
        Some(Point3::new(self.x[k], self.y[k], self.z[k]))
    }
}

fn mirror_point(point: Point3, axis: Axis) -> Point3 {
    match axis {
        Axis::X => Point3::new(-point.x, point.y, point.z),
        Axis::Y => Point3::new(point.x, -point.y, point.z),
        Axis::Z => Point3::new(point.x, point.y, -point.z),
    }
}
