use clap::Parser;
use skychart::cli::args::{Args, Commands, ShowArgs};
use skychart::cli::commands;
use std::process;

fn main() {
    // Parse command line arguments; no subcommand means "show the chart for
    // the saved location", which is the everyday use
    let args = Args::parse();
    let command = args
        .command
        .unwrap_or_else(|| Commands::Show(ShowArgs::default()));

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(command)) {
        Ok(()) => {}
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
