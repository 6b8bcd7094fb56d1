//! Integration tests for BEM rotor conversion
//!
//! These tests write BEM files laid out like propeller exports into a
//! temporary directory and run the full parse, place, assemble and write
//! pipeline through the public library API.

use bladegrid::app::services::converter::{InputKind, convert_bem, run_conversion};
use bladegrid::config::{ConverterConfig, FloatFormat};
use bladegrid::{GridError, Point3};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const TWISTED_BEM: &str = "...BEM Propeller...
Num_Sections: 2
Num_Blade: 3
Diameter: 2.0
Beta 3/4 (deg): 0.0
Center: 0.000000, 0.000000, 0.000000

Radius/R, Chord/R, Twist (deg), Rake/R, Skew/R
0.5, 1.0, 0.0, 0.0, 0.0
1.0, 0.5, 90.0, 0.0, 0.0

Section 0 X, Y
1.0, 0.0
0.0, 0.0
1.0, 0.1

Section 1 X, Y
1.0, 0.0
0.0, 0.0
1.0, 0.1
";

fn write_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn near(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Test the twisted placement end to end
///
/// Purpose: A table with a twist column selects twisted placement
/// Benefit: Confirms reverse station order and twist rotation in the output grid
#[test]
fn test_twisted_rotor_grid() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "prop.bem", TWISTED_BEM);

    let output = convert_bem(&input, &ConverterConfig::default()).unwrap();
    let grid = &output.grid;

    assert_eq!(output.summary.strategy, "twisted");
    assert_eq!(output.summary.stations, 2);
    assert_eq!((grid.nx(), grid.ny(), grid.nz()), (3, 2, 1));

    // Row 0 is the tip (radius 1.0, chord 0.5, twist 90 degrees)
    let tip_le = grid.point(1, 0).unwrap();
    assert!(near(tip_le.y, -1.0));
    // (-0.25, 0) rotated by 90 degrees -> (0, -0.25)
    assert!(near(tip_le.x, 0.0));
    assert!(near(tip_le.z, -0.25));

    // Row 1 is the root (radius 0.5, chord 1.0, no twist)
    assert_eq!(grid.point(0, 1), Some(Point3::new(0.5, -0.5, 0.0)));
    assert_eq!(grid.point(1, 1), Some(Point3::new(-0.5, -0.5, 0.0)));
}

/// Test grid file output for a twisted rotor
///
/// Purpose: Validate the written header and value count
/// Benefit: Ensures downstream flow solvers can read the dimensions line
#[test]
fn test_twisted_rotor_file_layout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "prop.bem", TWISTED_BEM);
    let output = temp_dir.path().join("prop.x");
    let config = ConverterConfig::default().with_float_format(FloatFormat::Fixed6);

    let summary = run_conversion(&input, &output, InputKind::Bem, &config).unwrap();
    assert_eq!(summary.nx * summary.ny, 6);

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "1");
    assert_eq!(lines[1], "3\t2\t1");
    assert_eq!(lines.len(), 2 + 3 * 6);
    assert!(
        lines[2..]
            .iter()
            .all(|value| value.split('.').nth(1).map(str::len) == Some(6))
    );
    // y block: tip rows first
    assert_eq!(
        &lines[8..14],
        &["-1.000000", "-1.000000", "-1.000000", "-0.500000", "-0.500000", "-0.500000"]
    );
}

/// Test section outlines of unequal length
///
/// Purpose: Reject sections with different point counts
/// Benefit: A ragged grid never reaches the output file
#[test]
fn test_unequal_sections_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let content = TWISTED_BEM.replacen("1.0, 0.1\n", "1.0, 0.1\n0.5, 0.05\n", 1);
    let input = write_input(&temp_dir, "ragged.bem", &content);
    let output = temp_dir.path().join("ragged.x");

    let err = run_conversion(&input, &output, InputKind::Bem, &ConverterConfig::default())
        .unwrap_err();
    assert!(matches!(err, GridError::InconsistentGeometry { .. }));
    assert!(!output.exists());
}

/// Test a non-numeric table cell
///
/// Purpose: Surface malformed station rows with their line number
/// Benefit: Users can find the broken line in large exports
#[test]
fn test_malformed_table_row() {
    let temp_dir = TempDir::new().unwrap();
    let content = TWISTED_BEM.replace("1.0, 0.5, 90.0", "1.0, abc, 90.0");
    let input = write_input(&temp_dir, "bad.bem", &content);

    let err = convert_bem(&input, &ConverterConfig::default()).unwrap_err();
    match err {
        GridError::MalformedRecord { context, .. } => assert!(context.contains("line 10")),
        other => panic!("unexpected error: {other:?}"),
    }
}

/// Test a missing input file
///
/// Purpose: I/O failures carry the offending path
/// Benefit: Clear error output from the CLI
#[test]
fn test_missing_input_file() {
    let err = convert_bem(
        &PathBuf::from("/nonexistent/prop.bem"),
        &ConverterConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GridError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/prop.bem"));
}
