//! Test fixtures for wing geometry parser testing

mod fields_tests;

/// One station chunk with every recognised field
pub fn station_chunk(index: usize, le: [f64; 3], te: [f64; 3], chord: f64) -> String {
    format!(
        "Geom Name, WingGeom
Geom ID, KQXAVPLTSM
Airfoil Index, {index}
XSec Flag, 0
XSec Index, {index}
XSecSurf ID, OBNJZHUWEV
FoilSurf u Value, 0.500000
Global u Value, {index}.500000
Leading Edge Point, {:.6}, {:.6}, {:.6}
Trailing Edge Point, {:.6}, {:.6}, {:.6}
Chord, {chord:.6}
Airfoil File Name, AirfoilFile_{index}.dat
",
        le[0], le[1], le[2], te[0], te[1], te[2]
    )
}

/// Two-station wing file: a root and a tip offset along y
pub fn create_test_wing() -> String {
    let separator = crate::constants::WING_CHUNK_SEPARATOR;
    format!(
        "Airfoil File Directory, /tmp/airfoils/\n{sep}\n{}{sep}\n{}",
        station_chunk(0, [0.0, 0.0, 0.0], [2.0, 0.0, 0.0], 2.0),
        station_chunk(1, [0.5, 4.0, 0.1], [1.5, 4.0, 0.1], 1.0),
        sep = separator
    )
}
