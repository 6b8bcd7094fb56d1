//! Command-line argument definitions for bladegrid
//!
//! This module defines the CLI interface using the clap derive API. Both
//! subcommands share the output and logging options in [`ConvertOptions`].

use crate::config::{ConverterConfig, FloatFormat};
use crate::{GridError, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// CLI arguments for the blade and wing grid converter
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bladegrid",
    version,
    about = "Convert BEM rotor and wing geometry files to structured surface grids",
    long_about = "Reads a BEM rotor description or a chunked wing geometry export, places \
                  each normalized airfoil outline at its physical station with chord scaling \
                  and twist, and writes a single-block structured surface grid in the \
                  plain-text PLOT3D layout."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert a BEM rotor file
    Bem(BemArgs),
    /// Convert a wing geometry file and its airfoil files
    Wing(WingArgs),
}

/// Arguments for the bem command
#[derive(Debug, Clone, Parser)]
pub struct BemArgs {
    /// BEM rotor file to convert
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[command(flatten)]
    pub options: ConvertOptions,
}

/// Arguments for the wing command
#[derive(Debug, Clone, Parser)]
pub struct WingArgs {
    /// Wing geometry file to convert
    ///
    /// Airfoil files named in the geometry are looked up in the same directory.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Mirror the wing across the symmetry plane
    ///
    /// Every station except the root is emitted a second time with its
    /// spanwise coordinate negated.
    #[arg(short = 's', long = "symmetry", help = "Mirror the wing to a full span")]
    pub symmetry: bool,

    #[command(flatten)]
    pub options: ConvertOptions,
}

/// Output and logging options shared by both commands
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConvertOptions {
    /// Output grid file
    ///
    /// Defaults to the input path with its extension replaced by `x`.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Output grid file (default: input with .x extension)"
    )]
    pub output: Option<PathBuf>,

    /// Write coordinates with six fixed decimals
    #[arg(long = "fixed", help = "Write coordinates with six fixed decimals")]
    pub fixed: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl ConvertOptions {
    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the converter configuration these options describe
    pub fn to_config(&self) -> ConverterConfig {
        let format = if self.fixed {
            FloatFormat::Fixed6
        } else {
            FloatFormat::Full
        };
        ConverterConfig::default().with_float_format(format)
    }

    /// Resolve the output path for `input`
    pub fn output_path(&self, input: &Path, config: &ConverterConfig) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => crate::app::services::converter::default_output_path(input, config),
        }
    }

    fn validate(&self, input: &Path) -> Result<()> {
        validate_input(input)?;

        if let Some(output) = &self.output {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(GridError::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }

            if output == input {
                return Err(GridError::configuration(format!(
                    "Output path would overwrite the input: {}",
                    output.display()
                )));
            }
        }

        Ok(())
    }
}

fn validate_input(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(GridError::configuration(format!(
            "Input file does not exist: {}",
            input.display()
        )));
    }

    if !input.is_file() {
        return Err(GridError::configuration(format!(
            "Input path is not a file: {}",
            input.display()
        )));
    }

    Ok(())
}

impl BemArgs {
    /// Validate arguments before any file is read
    pub fn validate(&self) -> Result<()> {
        self.options.validate(&self.input)
    }
}

impl WingArgs {
    /// Validate arguments before any file is read
    pub fn validate(&self) -> Result<()> {
        self.options.validate(&self.input)
    }
}
