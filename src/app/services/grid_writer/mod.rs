//! Structured surface grid assembly and output
//!
//! - [`assembler`] - station ordering, symmetry mirroring, [`StructuredGrid`]
//! - [`writer`] - the fixed plain-text grid format and atomic file output
//!
//! ## Output format
//!
//! ```text
//! 1
//! <nx>\t<ny>\t1
//! <x values, station-major, chordwise-minor>
//! <y values>
//! <z values>
//! ```

pub mod assembler;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use assembler::{StructuredGrid, Traversal};
pub use writer::{render_grid, write_grid_file};
