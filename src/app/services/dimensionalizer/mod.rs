//! Geometric dimensionalization of normalized airfoil outlines
//!
//! Turns unit-chord outlines into physical 3D points: chord scaling,
//! leading-edge placement and twist rotation. Rotor sections and wing
//! stations use different axis conventions, so each has its own module;
//! they share only the rotation primitives in [`twist`].

pub mod rotor;
pub mod twist;
pub mod wing;

#[cfg(test)]
pub mod tests;

pub use rotor::{
    ColumnLayout, PlainRotor, RotorDimensionalizer, RotorStation, TwistedRotor, build_stations,
    select_strategy,
};
pub use twist::{rotate, twist_angle};
pub use wing::{dimensionalize_station, to_grid_axes};
