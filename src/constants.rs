//! Application constants for bladegrid
//!
//! Format markers, field labels and default values shared by the parsers,
//! the dimensionalizer and the grid writer.

// =============================================================================
// BEM File Format
// =============================================================================

/// Line prefix that ends the header block and names the station table columns
pub const BEM_TABLE_SENTINEL: &str = "Radius/R";

/// Header key holding the rotor diameter
pub const BEM_DIAMETER_KEY: &str = "Diameter";

/// Header key holding the declared section count (informational only)
pub const BEM_SECTION_COUNT_KEY: &str = "Num_Sections";

/// Default table column names used to locate station quantities
pub mod bem_columns {
    /// Radial position as a fraction of the rotor radius
    pub const RADIUS: &str = "Radius/R";

    /// Chord length as a fraction of the rotor radius
    pub const CHORD: &str = "Chord/R";

    /// Geometric twist in degrees
    pub const TWIST: &str = "Twist";

    /// Positional fallbacks when a column header is not recognised
    pub const RADIUS_INDEX: usize = 0;
    pub const CHORD_INDEX: usize = 1;
}

// =============================================================================
// Wing Geometry File Format
// =============================================================================

/// Literal separator line between wing stations (40 `#` characters)
pub const WING_CHUNK_SEPARATOR: &str = "########################################";

/// Preamble label naming the shared airfoil directory
pub const WING_AIRFOIL_DIR_LABEL: &str = "Airfoil File Directory";

/// Field labels recognised inside a station chunk
pub mod wing_labels {
    pub const AIRFOIL_FILE_NAME: &str = "Airfoil File Name";
    pub const GEOM_NAME: &str = "Geom Name";
    pub const GEOM_ID: &str = "Geom ID";
    pub const AIRFOIL_INDEX: &str = "Airfoil Index";
    pub const XSEC_FLAG: &str = "XSec Flag";
    pub const XSEC_INDEX: &str = "XSec Index";
    pub const XSEC_SURF_ID: &str = "XSecSurf ID";
    pub const FOIL_SURF_U: &str = "FoilSurf u Value";
    pub const GLOBAL_U: &str = "Global u Value";
    pub const LEADING_EDGE: &str = "Leading Edge Point";
    pub const TRAILING_EDGE: &str = "Trailing Edge Point";
    pub const CHORD: &str = "Chord";
}

// =============================================================================
// Grid Output
// =============================================================================

/// Number of blocks written to every grid file
pub const GRID_BLOCK_COUNT: usize = 1;

/// Node count in the k direction for a surface grid
pub const GRID_NODES_DIRZ: usize = 1;

/// Default extension for generated grid files
pub const DEFAULT_OUTPUT_EXTENSION: &str = "x";

/// Package name used for the default tracing filter
pub const LOG_TARGET: &str = "bladegrid";
