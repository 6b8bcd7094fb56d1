//! Core BEM parser implementation
//!
//! Reads a BEM file and runs the header, table and section stages in turn,
//! advancing an explicit line cursor by the count each stage consumed.

use std::path::Path;
use tracing::{info, warn};

use super::header::parse_header;
use super::sections::parse_sections;
use super::table::parse_table;
use crate::app::models::BemData;
use crate::constants::BEM_SECTION_COUNT_KEY;
use crate::error::{GridError, Result};

/// Parser for rotor BEM definition files
#[derive(Debug, Default, Clone, Copy)]
pub struct BemParser;

impl BemParser {
    pub fn new() -> Self {
        Self
    }

    /// Read and parse a BEM file
    pub fn parse_file(&self, file_path: &Path) -> Result<BemData> {
        info!("Parsing BEM file: {}", file_path.display());

        let content =
            std::fs::read_to_string(file_path).map_err(|e| GridError::io(file_path, e))?;

        self.parse_str(&content)
    }

    /// Parse BEM content already held in memory
    pub fn parse_str(&self, content: &str) -> Result<BemData> {
        let lines: Vec<&str> = content.lines().collect();

        let (header, header_lines) = parse_header(&lines);
        let mut cursor = header_lines;

        let (table, table_lines) = parse_table(&lines[cursor..], cursor + 1)?;
        cursor += table_lines;

        let (sections, _) = parse_sections(&lines[cursor.min(lines.len())..], cursor + 1)?;

        if let Some(declared) = header.get_int(BEM_SECTION_COUNT_KEY) {
            if declared != table.row_count() as i64 {
                warn!(
                    "{} declares {} sections but the table has {} rows",
                    BEM_SECTION_COUNT_KEY,
                    declared,
                    table.row_count()
                );
            }
        }

        info!(
            "Parsed BEM data: {} header entries, {} stations, {} sections",
            header.len(),
            table.row_count(),
            sections.len()
        );

        Ok(BemData {
            header,
            table,
            sections,
        })
    }
}
