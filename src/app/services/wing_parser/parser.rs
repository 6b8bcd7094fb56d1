//! Core wing geometry parser implementation
//!
//! Splits the file into station chunks on the `#` separator line and runs
//! the field grammar over each chunk independently.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};

use super::fields::{FieldMatch, scan_chunk};
use crate::app::models::{WingGeometry, WingStation};
use crate::constants::{WING_AIRFOIL_DIR_LABEL, WING_CHUNK_SEPARATOR};
use crate::error::{GridError, Result};

static AIRFOIL_DIRECTORY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{},\s*(.+)",
        regex::escape(WING_AIRFOIL_DIR_LABEL)
    ))
    .expect("airfoil directory pattern is valid")
});

/// Parser for chunked wing geometry files
#[derive(Debug, Default, Clone, Copy)]
pub struct WingParser;

impl WingParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a wing geometry file
    pub fn parse_file(&self, file_path: &Path) -> Result<WingGeometry> {
        info!("Parsing wing geometry file: {}", file_path.display());

        let content =
            std::fs::read_to_string(file_path).map_err(|e| GridError::io(file_path, e))?;

        Ok(self.parse_str(&content))
    }

    /// Parse wing geometry content already held in memory
    ///
    /// Never fails: chunks without any recognised field are skipped and
    /// fields that do not convert are left unset.
    pub fn parse_str(&self, content: &str) -> WingGeometry {
        let mut chunks = content.split(WING_CHUNK_SEPARATOR);

        let airfoil_directory = chunks
            .next()
            .and_then(|preamble| AIRFOIL_DIRECTORY.captures(preamble))
            .map(|captures| captures[1].trim().to_string());
        if let Some(directory) = &airfoil_directory {
            debug!("Airfoil directory declared in preamble: {}", directory);
        }

        let mut stations = Vec::new();
        for (chunk_index, chunk) in chunks.enumerate() {
            if chunk.trim().is_empty() {
                continue;
            }

            match parse_station(chunk, chunk_index + 1) {
                Some(station) => stations.push(station),
                None => warn!(
                    "Chunk {} contains no recognised station fields; skipping",
                    chunk_index + 1
                ),
            }
        }

        info!("Parsed {} wing stations", stations.len());

        WingGeometry {
            airfoil_directory,
            stations,
        }
    }
}

/// Build a station from one chunk, `None` if no field label was found
fn parse_station(chunk: &str, chunk_number: usize) -> Option<WingStation> {
    let matches = scan_chunk(chunk);
    if matches.is_empty() {
        return None;
    }

    let mut station = WingStation::default();
    for field_match in matches {
        match field_match {
            FieldMatch::Parsed(field, value) => station.apply(field, value),
            FieldMatch::Unparsed(field, text) => warn!(
                "Chunk {}: could not parse {:?} from '{}'; leaving it unset",
                chunk_number, field, text
            ),
        }
    }

    debug!(
        "Chunk {}: airfoil={:?} chord={:?}",
        chunk_number, station.airfoil_file, station.chord
    );

    Some(station)
}
