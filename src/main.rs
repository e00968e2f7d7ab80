use clap::{CommandFactory, Parser};
use simple_nem12::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::run(args) {
        // Error occurred - print to stderr and exit with error code
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("SimpleNem12 Parser - interval metering file reader");
    println!("==================================================");
    println!();
    println!("Read SimpleNem12 files and report the daily volumes recorded for each meter.");
    println!();

    if Args::command().print_help().is_err() {
        println!("Run simple-nem12 --help for usage.");
    }

    println!();
    println!("EXAMPLES:");
    println!("    # Print meter reads from a file:");
    println!("    simple-nem12 parse SimpleNem12.csv");
    println!();
    println!("    # Export every interval record as CSV:");
    println!("    simple-nem12 parse SimpleNem12.csv --output-format csv");
    println!();
    println!("    # Check a file and report the first failure:");
    println!("    simple-nem12 validate SimpleNem12.csv");
}
