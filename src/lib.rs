//! Bladegrid Library
//!
//! Converts rotor blade and wing geometry descriptions into single-block
//! structured surface grids in the plain-text PLOT3D layout.
//!
//! This library provides tools for:
//! - Parsing BEM rotor files (header, station table, section outlines)
//! - Parsing chunked wing geometry files and their airfoil coordinate files
//! - Placing normalized outlines at physical stations with chord scaling and twist
//! - Assembling stations into a grid, optionally mirrored across a symmetry plane
//! - Writing grid files atomically

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod airfoil_loader;
        pub mod bem_parser;
        pub mod converter;
        pub mod dimensionalizer;
        pub mod grid_writer;
        pub mod wing_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{BemData, Point2, Point3, WingGeometry};
pub use app::services::converter::{ConversionSummary, convert_bem, convert_wing};
pub use app::services::grid_writer::StructuredGrid;
pub use config::ConverterConfig;
pub use error::{GridError, Result};
