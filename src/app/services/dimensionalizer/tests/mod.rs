//! Test utilities for dimensionalizer testing

use crate::app::models::{Point2, Point3};


pub const TOLERANCE: f64 = 1e-12;

/// Assert two points agree within [`TOLERANCE`]
pub fn assert_point_near(actual: Point3, expected: Point3) {
    let close = (actual.x - expected.x).abs() < TOLERANCE
        && (actual.y - expected.y).abs() < TOLERANCE
        && (actual.z - expected.z).abs() < TOLERANCE;
    assert!(close, "expected {:?}, got {:?}", expected, actual);
}

/// Three-point outline used across the placement tests
pub fn trivial_outline() -> Vec<Point2> {
    vec![
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
    ]
}
