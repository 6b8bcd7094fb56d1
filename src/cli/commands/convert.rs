//! The `bem` and `wing` conversion commands

use anyhow::Context;
use std::time::Instant;
use tracing::info;

use super::shared::{print_summary, setup_logging};
use crate::app::services::converter::{ConversionSummary, InputKind, run_conversion};
use crate::cli::args::{BemArgs, ConvertOptions, WingArgs};

/// Run the bem command
pub fn run_bem(args: BemArgs) -> anyhow::Result<ConversionSummary> {
    setup_logging(&args.options);
    args.validate()?;

    convert(&args.input, InputKind::Bem, &args.options)
        .with_context(|| format!("Failed to convert BEM file {}", args.input.display()))
}

/// Run the wing command
pub fn run_wing(args: WingArgs) -> anyhow::Result<ConversionSummary> {
    setup_logging(&args.options);
    args.validate()?;

    let kind = InputKind::Wing {
        symmetric: args.symmetry,
    };
    convert(&args.input, kind, &args.options)
        .with_context(|| format!("Failed to convert wing file {}", args.input.display()))
}

fn convert(
    input: &std::path::Path,
    kind: InputKind,
    options: &ConvertOptions,
) -> anyhow::Result<ConversionSummary> {
    let start_time = Instant::now();
    let config = options.to_config();
    let output = options.output_path(input, &config);
    info!("Input kind: {:?}", kind);

    let summary = run_conversion(input, &output, kind, &config)?;

    if !options.quiet {
        print_summary(&summary, &output, start_time.elapsed());
    }
    Ok(summary)
}
