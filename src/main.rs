use bladegrid::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    match commands::run(command) {
        Ok(_summary) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Bladegrid - Blade and Wing Surface Grid Converter");
    println!("=================================================");
    println!();
    println!("Convert BEM rotor files and wing geometry exports into single-block");
    println!("structured surface grids (PLOT3D plain-text layout).");
    println!();
    println!("USAGE:");
    println!("    bladegrid <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    bem     Convert a BEM rotor file");
    println!("    wing    Convert a wing geometry file and its airfoil files");
    println!("    help    Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert a propeller, writing prop.x beside the input:");
    println!("    bladegrid bem prop.bem");
    println!();
    println!("    # Convert a half wing and mirror it to a full span:");
    println!("    bladegrid wing wing_geom.txt --symmetry -o full_wing.x");
    println!();
    println!("For detailed help on any command, use:");
    println!("    bladegrid <COMMAND> --help");
}
