//! Grid file serialization
//!
//! Writes the block count, the node counts, then every x value, every y
//! value and every z value, one per line. Files are written through a
//! temporary file in the destination directory and only moved into place
//! once fully written. New files get the usual `0o666 & !umask` mode; a
//! replaced file keeps its previous permissions.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};
use tracing::info;

use super::assembler::StructuredGrid;
use crate::config::FloatFormat;
use crate::constants::GRID_BLOCK_COUNT;
use crate::error::{GridError, Result};

/// Serialize a grid to any writer
pub fn render_grid<W: Write>(
    grid: &StructuredGrid,
    writer: &mut W,
    format: FloatFormat,
) -> std::io::Result<()> {
    writeln!(writer, "{}", GRID_BLOCK_COUNT)?;
    writeln!(writer, "{}\t{}\t{}", grid.nx(), grid.ny(), grid.nz())?;

    for axis in [grid.x(), grid.y(), grid.z()] {
        for value in axis {
            writeln!(writer, "{}", format.format(*value))?;
        }
    }

    Ok(())
}

/// Write a grid file at `path`, replacing any existing file
pub fn write_grid_file(grid: &StructuredGrid, path: &Path, format: FloatFormat) -> Result<()> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = create_temp_file(directory).map_err(|e| GridError::io(path, e))?;
    if let Ok(existing) = fs::metadata(path) {
        temp_file
            .as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| GridError::io(path, e))?;
    }
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        render_grid(grid, &mut writer, format).map_err(|e| GridError::io(path, e))?;
        writer.flush().map_err(|e| GridError::io(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| GridError::io(path, e.error))?;

    info!(
        "Wrote {}x{} grid to {}",
        grid.nx(),
        grid.ny(),
        path.display()
    );
    Ok(())
}

/// Temporary file in `directory` created with a umask-filtered `0o666` mode
fn create_temp_file(directory: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(directory)
}
