//! Test fixtures for BEM parser testing
//!
//! Shared BEM file contents and helpers used by the stage and parser tests.

use std::io::Write;
use tempfile::NamedTempFile;

mod table_tests;

/// BEM content laid out like a propeller export with a twist column
pub fn create_test_bem() -> String {
    r#"...BEM Propeller...
Num_Sections: 3
Num_Blade: 2
Diameter: 10.0
Beta 3/4 (deg): 20.5
Feather (deg): 0.0
Pre_Cone (deg): 0.0
Center: 0.000000, 0.000000, 0.000000
Normal: -1.000000, 0.000000, 0.000000

Radius/R, Chord/R, Twist (deg), Rake/R, Skew/R, Sweep, t/c, CLi, Axial, Tangential
0.2, 0.10, 30.0, 0.0, 0.0, 0.0, 0.12, 0.5, 0.0, 0.0
0.6, 0.08, 20.0, 0.0, 0.0, 0.0, 0.10, 0.5, 0.0, 0.0
1.0, 0.05, 10.0, 0.0, 0.0, 0.0, 0.08, 0.5, 0.0, 0.0

Section 0 X, Y
1.0, 0.0
0.0, 0.0
1.0, -0.01

Section 1 X, Y
1.0, 0.0
0.0, 0.0
1.0, -0.02

Section 2 X, Y
1.0, 0.0
0.0, 0.0
1.0, -0.03
"#
    .to_string()
}

/// Minimal BEM content without a twist column
pub fn create_plain_bem() -> String {
    r#"Diameter: 10.0
Radius/R, Chord/R
0.5, 0.8
1.0, 0.6

Section 0 X, Y
0.0, 0.0
1.0, 0.0
0.0, 1.0

Section 1 X, Y
0.0, 0.0
1.0, 0.0
0.0, 1.0
"#
    .to_string()
}

/// Split content into lines the way the parser does
pub fn lines_of(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
