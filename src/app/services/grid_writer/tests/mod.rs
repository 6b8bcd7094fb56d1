//! Test utilities for grid assembly and output

use crate::app::models::Point3;


/// `count` stations of `nx` points, station `j` point `i` at `(i, j, 10j + i)`
pub fn numbered_stations(count: usize, nx: usize) -> Vec<Vec<Point3>> {
    (0..count)
        .map(|j| {
            (0..nx)
                .map(|i| Point3::new(i as f64, j as f64, (10 * j + i) as f64))
                .collect()
        })
        .collect()
}
