//! Conversion pipelines
//!
//! Wires the parsers, the airfoil loader, the dimensionalizers and the grid
//! assembler together for the two supported inputs. Nothing is written until
//! the grid is fully assembled, so a failed conversion leaves no output file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use crate::app::services::airfoil_loader::attach_airfoils;
use crate::app::services::bem_parser::BemParser;
use crate::app::services::dimensionalizer::{
    ColumnLayout, build_stations, dimensionalize_station, select_strategy, to_grid_axes,
};
use crate::app::services::grid_writer::{StructuredGrid, Traversal, write_grid_file};
use crate::app::services::wing_parser::WingParser;
use crate::config::ConverterConfig;
use crate::error::{GridError, Result};

/// Figures reported after a conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub stations: usize,
    pub nx: usize,
    pub ny: usize,
    pub strategy: &'static str,
}

/// Assembled grid plus its summary
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub grid: StructuredGrid,
    pub summary: ConversionSummary,
}

impl ConversionOutput {
    fn new(grid: StructuredGrid, stations: usize, strategy: &'static str) -> Self {
        let summary = ConversionSummary {
            stations,
            nx: grid.nx(),
            ny: grid.ny(),
            strategy,
        };
        Self { grid, summary }
    }
}

/// Which input format a conversion reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Bem,
    Wing { symmetric: bool },
}

/// Convert a BEM rotor file into a grid
pub fn convert_bem(path: &Path, config: &ConverterConfig) -> Result<ConversionOutput> {
    config.validate()?;

    let data = BemParser::new().parse_file(path)?;
    let row_count = data.table.row_count();
    data.sections.validate(row_count)?;

    let layout = ColumnLayout::resolve(&data.table, config);
    let stations = build_stations(&data, &layout, config)?;
    let strategy = select_strategy(&layout);

    let mut placed = Vec::with_capacity(stations.len());
    for (index, station) in stations.iter().enumerate() {
        let outline = data.sections.get(index).ok_or_else(|| {
            GridError::inconsistent(format!("section {} is missing for station {}", index, index))
        })?;
        placed.push(strategy.dimensionalize(station, outline));
    }

    let grid = StructuredGrid::assemble(&placed, strategy.traversal(), None)?;
    debug!(
        "BEM conversion of {} produced {}x{} grid",
        path.display(),
        grid.nx(),
        grid.ny()
    );
    Ok(ConversionOutput::new(grid, stations.len(), strategy.name()))
}

/// Convert a wing geometry file into a grid
///
/// Airfoil files are resolved next to the wing file. With `symmetric`, the
/// non-root stations are mirrored across `config.symmetry_axis`.
pub fn convert_wing(
    path: &Path,
    symmetric: bool,
    config: &ConverterConfig,
) -> Result<ConversionOutput> {
    config.validate()?;

    let mut geometry = WingParser::new().parse_file(path)?;
    if geometry.stations.is_empty() {
        return Err(GridError::malformed(
            path.display().to_string(),
            "no wing stations found",
        ));
    }

    let base_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    attach_airfoils(&mut geometry, base_dir)?;

    let placed = geometry
        .stations
        .iter()
        .enumerate()
        .map(|(index, station)| {
            dimensionalize_station(station, index)
                .map(|points| points.into_iter().map(to_grid_axes).collect::<Vec<_>>())
        })
        .collect::<Result<Vec<_>>>()?;

    let mirror = symmetric.then_some(config.symmetry_axis);
    let grid = StructuredGrid::assemble(&placed, Traversal::Reverse, mirror)?;
    let strategy = if symmetric { "wing (mirrored)" } else { "wing" };

    Ok(ConversionOutput::new(grid, placed.len(), strategy))
}

/// Output path beside the input with the grid extension
pub fn default_output_path(input: &Path, config: &ConverterConfig) -> PathBuf {
    input.with_extension(&config.output_extension)
}

/// Convert `input` and write the grid to `output`
pub fn run_conversion(
    input: &Path,
    output: &Path,
    kind: InputKind,
    config: &ConverterConfig,
) -> Result<ConversionSummary> {
    let start_time = Instant::now();
    info!("Converting {} -> {}", input.display(), output.display());

    let converted = match kind {
        InputKind::Bem => convert_bem(input, config)?,
        InputKind::Wing { symmetric } => convert_wing(input, symmetric, config)?,
    };

    write_grid_file(&converted.grid, output, config.float_format)?;

    info!(
        "Conversion finished in {:.2}ms",
        start_time.elapsed().as_secs_f64() * 1000.0
    );
    Ok(converted.summary)
}
