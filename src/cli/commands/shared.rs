//! Shared components for CLI commands

use crate::app::services::converter::ConversionSummary;
use crate::cli::args::ConvertOptions;
use crate::constants::LOG_TARGET;
use colored::*;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Set up structured logging for a conversion command
pub fn setup_logging(options: &ConvertOptions) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = options.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    // A second command in the same process keeps the first subscriber
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Print the conversion summary to stdout
pub fn print_summary(summary: &ConversionSummary, output: &Path, elapsed: Duration) {
    println!("\n{}", "Conversion Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Output:".bright_cyan(),
        output.display().to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Placement:".bright_cyan(),
        summary.strategy.bright_white()
    );
    println!(
        "  {} {}",
        "Stations:".bright_cyan(),
        summary.stations.to_string().bright_white()
    );
    println!(
        "  {} {} x {} x 1",
        "Grid size:".bright_cyan(),
        summary.nx.to_string().bright_white().bold(),
        summary.ny.to_string().bright_white().bold()
    );
    println!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed.as_millis().to_string().bright_white()
    );
}
