//! Command implementations for the bladegrid CLI
//!
//! - `convert`: the `bem` and `wing` conversion workflows
//! - `shared`: logging setup and the terminal summary

pub mod convert;
pub mod shared;

use crate::app::services::converter::ConversionSummary;
use crate::cli::args::Commands;

/// Main command runner, dispatching to the subcommand handler
pub fn run(command: Commands) -> anyhow::Result<ConversionSummary> {
    match command {
        Commands::Bem(bem_args) => convert::run_bem(bem_args),
        Commands::Wing(wing_args) => convert::run_wing(wing_args),
    }
}
